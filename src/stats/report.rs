//! The computed statistics for one player under one filter.

use serde::Serialize;

use super::aggregate::{aggregate, Counters};
use super::derived::{
    batting_average, batting_strike_rate, best_bowling_display, bowling_average,
    bowling_strike_rate, economy_rate, Rate,
};
use super::filter::{filter_performances, MatchPerformance, StatsFilter};
use super::overs::balls_to_overs;
use crate::cli::types::PlayerId;
use crate::records::{Match, Tournament};


/// Raw counters, derived rates and the contributing performances.
///
/// Purely derived from a snapshot; recompute rather than persist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedStats {
    pub player_id: PlayerId,
    pub filter: StatsFilter,
    #[serde(flatten)]
    pub counters: Counters,
    pub times_out: u32,
    pub batting_average: Rate,
    pub batting_strike_rate: Rate,
    pub overs: String,
    pub bowling_average: Rate,
    pub economy: Rate,
    pub bowling_strike_rate: Rate,
    pub best_bowling_figures: String,
    /// Chronological, oldest first.
    pub performances: Vec<MatchPerformance>,
}

impl CalculatedStats {
    /// Apply the derived-metric formulas to aggregated counters.
    pub fn from_counters(
        player_id: PlayerId,
        filter: StatsFilter,
        counters: Counters,
        performances: Vec<MatchPerformance>,
    ) -> Self {
        let times_out = counters.times_out();
        Self {
            player_id,
            filter,
            times_out,
            batting_average: batting_average(counters.runs, times_out),
            batting_strike_rate: batting_strike_rate(counters.runs, counters.balls_faced),
            overs: balls_to_overs(counters.balls_bowled),
            bowling_average: bowling_average(counters.runs_conceded, counters.wickets),
            economy: economy_rate(counters.runs_conceded, counters.balls_bowled),
            bowling_strike_rate: bowling_strike_rate(counters.balls_bowled, counters.wickets),
            best_bowling_figures: best_bowling_display(counters.best_bowling),
            counters,
            performances,
        }
    }

    pub fn has_played(&self) -> bool {
        self.counters.matches > 0
    }
}

/// Filter, aggregate and derive statistics for one player.
///
/// Never fails: missing fields read as zero, an unknown tournament name
/// yields empty statistics.
pub fn compute_stats(
    player_id: PlayerId,
    matches: &[Match],
    tournaments: &[Tournament],
    filter: &StatsFilter,
) -> CalculatedStats {
    let performances = filter_performances(player_id, matches, tournaments, filter);
    let counters = aggregate(player_id, &performances);
    CalculatedStats::from_counters(player_id, filter.clone(), counters, performances)
}

/// Statistics over the whole career, ignoring any active filter.
pub fn compute_career_stats(
    player_id: PlayerId,
    matches: &[Match],
    tournaments: &[Tournament],
) -> CalculatedStats {
    compute_stats(player_id, matches, tournaments, &StatsFilter::career())
}
