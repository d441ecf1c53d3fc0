//! Single chronological pass producing raw cumulative counters.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Serialize;

use super::filter::MatchPerformance;
use crate::cli::types::{MatchId, PlayerId};
use crate::records::{DismissalKind, Performance};


/// Length of the rolling recent-form windows.
pub const RECENT_FORM_WINDOW: usize = 5;

/// Wickets and runs conceded in one bowling innings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BowlingFigures {
    pub wickets: u32,
    pub runs: u32,
}

impl BowlingFigures {
    /// More wickets wins; equal wickets with fewer runs wins.
    pub fn beats(&self, other: &BowlingFigures) -> bool {
        self.wickets > other.wickets || (self.wickets == other.wickets && self.runs < other.runs)
    }
}

impl fmt::Display for BowlingFigures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.wickets, self.runs)
    }
}

/// Raw totals for one player under one filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Counters {
    /// Distinct match ids, not performance count.
    pub matches: u32,

    pub innings_batted: u32,
    pub not_outs: u32,
    pub runs: u32,
    pub highest_score: u32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
    pub twenty_fives: u32,
    pub fifties: u32,
    pub hundreds: u32,
    pub ducks: u32,

    pub innings_bowled: u32,
    pub balls_bowled: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub best_bowling: Option<BowlingFigures>,
    pub three_wicket_hauls: u32,
    pub five_wicket_hauls: u32,
    pub hat_tricks: u32,

    pub catches: u32,
    pub stumpings: u32,
    pub run_outs: u32,
    pub motm: u32,

    /// Most recent first; `None` where the player did not bat.
    pub last5_batting_scores: Vec<Option<u32>>,
    /// Most recent first, as `"wickets/runs"`; `None` where the player did not bowl.
    pub last5_bowling_figures: Vec<Option<String>>,

    pub dismissal_kinds: BTreeMap<DismissalKind, u32>,
    pub dismissed_by_bowlers: BTreeMap<String, u32>,
    pub caught_by_fielders: BTreeMap<String, u32>,
}

impl Counters {
    pub fn times_out(&self) -> u32 {
        self.innings_batted.saturating_sub(self.not_outs)
    }
}

/// Running state of the pass. Rolling windows are collected oldest first
/// and reversed once the pass is done. Summed fields saturate at `u32::MAX`.
#[derive(Default)]
struct Accumulator {
    counters: Counters,
    match_ids: HashSet<MatchId>,
    batting_form: Vec<Option<u32>>,
    bowling_form: Vec<Option<String>>,
}

impl Accumulator {
    fn record(mut self, player_id: PlayerId, entry: &MatchPerformance) -> Self {
        let p = &entry.performance;
        self.match_ids.insert(p.match_id);

        let batting = p.batted().then(|| self.record_batting(p));
        self.batting_form.push(batting);

        let bowling = p.bowled().then(|| self.record_bowling(p));
        self.bowling_form.push(bowling);

        let c = &mut self.counters;
        c.catches = c.catches.saturating_add(p.catches.unwrap_or(0));
        c.stumpings = c.stumpings.saturating_add(p.stumpings.unwrap_or(0));
        c.run_outs = c.run_outs.saturating_add(p.run_outs.unwrap_or(0));
        if entry.motm_player_id == Some(player_id) {
            c.motm += 1;
        }
        self
    }

    /// Returns the runs for the recent-form window.
    fn record_batting(&mut self, p: &Performance) -> u32 {
        let c = &mut self.counters;
        let runs = p.runs.unwrap_or(0);

        c.innings_batted += 1;
        if !p.dismissed {
            c.not_outs += 1;
        }
        c.runs = c.runs.saturating_add(runs);
        c.balls_faced = c.balls_faced.saturating_add(p.balls_faced.unwrap_or(0));
        c.fours = c.fours.saturating_add(p.fours.unwrap_or(0));
        c.sixes = c.sixes.saturating_add(p.sixes.unwrap_or(0));
        c.highest_score = c.highest_score.max(runs);

        if runs >= 100 {
            c.hundreds += 1;
        } else if runs >= 50 {
            c.fifties += 1;
        } else if runs >= 25 {
            c.twenty_fives += 1;
        }

        if p.dismissed {
            let kind = p.dismissal_kind.unwrap_or(DismissalKind::Other);
            *c.dismissal_kinds.entry(kind).or_insert(0) += 1;
            if let Some(bowler) = p.bowler() {
                *c.dismissed_by_bowlers.entry(bowler.to_string()).or_insert(0) += 1;
            }
            if kind == DismissalKind::Caught {
                if let Some(fielder) = p.fielder() {
                    *c.caught_by_fielders.entry(fielder.to_string()).or_insert(0) += 1;
                }
            }
            if runs == 0 {
                c.ducks += 1;
            }
        }
        runs
    }

    /// Returns the `"wickets/runs"` label for the recent-form window.
    fn record_bowling(&mut self, p: &Performance) -> String {
        let c = &mut self.counters;
        let wickets = p.wickets.unwrap_or(0);
        let runs = p.runs_conceded.unwrap_or(0);

        c.innings_bowled += 1;
        c.balls_bowled = c.balls_bowled.saturating_add(p.balls_bowled());
        c.runs_conceded = c.runs_conceded.saturating_add(runs);
        c.wickets = c.wickets.saturating_add(wickets);

        let figures = BowlingFigures { wickets, runs };
        if c.best_bowling.map_or(true, |best| figures.beats(&best)) {
            c.best_bowling = Some(figures);
        }

        if wickets >= 5 {
            c.five_wicket_hauls += 1;
        } else if wickets >= 3 {
            c.three_wicket_hauls += 1;
        }
        if p.hat_trick {
            c.hat_tricks += 1;
        }

        match p.runs_conceded {
            Some(r) => format!("{}/{}", wickets, r),
            None => format!("{}/-", wickets),
        }
    }

    fn finish(self) -> Counters {
        let mut counters = self.counters;
        counters.matches = self.match_ids.len() as u32;
        counters.last5_batting_scores = recent_first(self.batting_form);
        counters.last5_bowling_figures = recent_first(self.bowling_form);
        counters
    }
}

fn recent_first<T>(window: Vec<T>) -> Vec<T> {
    window.into_iter().rev().take(RECENT_FORM_WINDOW).collect()
}

/// Fold the chronologically sorted performances of `player_id` into counters.
///
/// Duplicate performances for one match are all summed; only `matches`
/// deduplicates by match id.
pub fn aggregate(player_id: PlayerId, performances: &[MatchPerformance]) -> Counters {
    performances
        .iter()
        .fold(Accumulator::default(), |acc, entry| acc.record(player_id, entry))
        .finish()
}
