//! Fixture builders shared by the statistics unit tests.

use crate::cli::types::{MatchId, PlayerId, TournamentId};
use crate::records::{DismissalKind, Match, Performance, Tournament};

pub const ASHA: PlayerId = PlayerId(1);
pub const KIRAN: PlayerId = PlayerId(2);

pub fn batting(player: PlayerId, match_id: u64, runs: u32, balls: u32, out: bool) -> Performance {
    Performance {
        runs: Some(runs),
        balls_faced: Some(balls),
        dismissed: out,
        did_not_bowl: true,
        ..Performance::new(player, MatchId::new(match_id))
    }
}

pub fn dismissed_by(
    mut p: Performance,
    kind: DismissalKind,
    bowler: Option<&str>,
    fielder: Option<&str>,
) -> Performance {
    p.dismissed = true;
    p.dismissal_kind = Some(kind);
    p.bowler_name = bowler.map(str::to_string);
    p.fielder_name = fielder.map(str::to_string);
    p
}

pub fn bowling(player: PlayerId, match_id: u64, overs: &str, runs: u32, wickets: u32) -> Performance {
    Performance {
        did_not_bat: true,
        overs: Some(overs.to_string()),
        runs_conceded: Some(runs),
        wickets: Some(wickets),
        ..Performance::new(player, MatchId::new(match_id))
    }
}

pub fn fixture(id: u64, date: &str, format: &str, performances: Vec<Performance>) -> Match {
    Match {
        performances,
        ..Match::new(MatchId::new(id), date, format)
    }
}

pub fn in_tournament(mut m: Match, tournament: u64) -> Match {
    m.tournament_id = Some(TournamentId::new(tournament));
    m
}

pub fn tournament(id: u64, name: &str) -> Tournament {
    Tournament::new(TournamentId::new(id), name)
}
