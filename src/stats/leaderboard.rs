//! Cross-player views: leaderboards and head-to-head comparison.
//!
//! Per-player statistics are independent, so they are computed in parallel
//! with `rayon`. Results keep dataset order before any ranking, which keeps
//! ties stable.

use std::cmp::Reverse;
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Serialize, Serializer};
use tracing::warn;

use super::derived::Rate;
use super::engine::StatsEngine;
use super::filter::StatsFilter;
use super::report::CalculatedStats;
use crate::cli::types::PlayerId;
use crate::error::{Result, StatsError};
use crate::records::Player;


pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;
pub const MIN_COMPARE_PLAYERS: usize = 2;
pub const MAX_COMPARE_PLAYERS: usize = 3;

/// One ranked row of a leaderboard table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based.
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub matches: u32,
    pub runs: u32,
    pub wickets: u32,
    pub batting_average: Rate,
    pub batting_strike_rate: Rate,
    pub bowling_average: Rate,
    pub economy: Rate,
}

impl LeaderboardEntry {
    fn new(rank: usize, player: &Player, stats: &CalculatedStats) -> Self {
        Self {
            rank,
            player_id: player.id,
            name: player.name.clone(),
            matches: stats.counters.matches,
            runs: stats.counters.runs,
            wickets: stats.counters.wickets,
            batting_average: stats.batting_average,
            batting_strike_rate: stats.batting_strike_rate,
            bowling_average: stats.bowling_average,
            economy: stats.economy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub filter: StatsFilter,
    pub most_runs: Vec<LeaderboardEntry>,
    pub most_wickets: Vec<LeaderboardEntry>,
}

/// Rank every player who played at least one match under `filter`.
pub fn build_leaderboard(engine: &StatsEngine<'_>, filter: &StatsFilter, limit: usize) -> Leaderboard {
    let rows: Vec<(&Player, Arc<CalculatedStats>)> = engine
        .dataset()
        .players
        .par_iter()
        .map(|player| (player, engine.stats(player.id, filter)))
        .filter(|(_, stats)| stats.has_played())
        .collect();

    Leaderboard {
        filter: filter.clone(),
        most_runs: ranked(&rows, limit, |s| s.counters.runs),
        most_wickets: ranked(&rows, limit, |s| s.counters.wickets),
    }
}

fn ranked<F>(rows: &[(&Player, Arc<CalculatedStats>)], limit: usize, key: F) -> Vec<LeaderboardEntry>
where
    F: Fn(&CalculatedStats) -> u32,
{
    let mut order: Vec<&(&Player, Arc<CalculatedStats>)> = rows.iter().collect();
    order.sort_by_key(|(_, stats)| Reverse(key(stats)));
    order
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, (player, stats))| LeaderboardEntry::new(i + 1, player, stats))
        .collect()
}

/// One player's column in a head-to-head comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow<'a> {
    pub player: &'a Player,
    #[serde(serialize_with = "serialize_shared")]
    pub stats: Arc<CalculatedStats>,
}

fn serialize_shared<S>(stats: &Arc<CalculatedStats>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    stats.as_ref().serialize(serializer)
}

/// Side-by-side stats for two or three players, in the order given.
///
/// Unknown ids are skipped and anything past the third resolved player is
/// ignored. Fewer than two resolved players is an error.
pub fn compare_players<'a>(
    engine: &StatsEngine<'a>,
    player_ids: &[PlayerId],
    filter: &StatsFilter,
) -> Result<Vec<ComparisonRow<'a>>> {
    let dataset = engine.dataset();
    let mut players: Vec<&'a Player> = Vec::with_capacity(MAX_COMPARE_PLAYERS);
    for &id in player_ids {
        match dataset.player(id) {
            Some(player) if players.iter().any(|p| p.id == player.id) => {
                warn!(player = %id, "player listed twice, ignoring repeat");
            }
            Some(player) => players.push(player),
            None => warn!(player = %id, "unknown player, skipping"),
        }
    }

    if players.len() < MIN_COMPARE_PLAYERS {
        return Err(StatsError::NotEnoughPlayers {
            required: MIN_COMPARE_PLAYERS,
            given: players.len(),
        });
    }
    if players.len() > MAX_COMPARE_PLAYERS {
        warn!(
            given = players.len(),
            max = MAX_COMPARE_PLAYERS,
            "too many players to compare, keeping the first"
        );
        players.truncate(MAX_COMPARE_PLAYERS);
    }

    Ok(players
        .into_par_iter()
        .map(|player| ComparisonRow {
            player,
            stats: engine.stats(player.id, filter),
        })
        .collect())
}
