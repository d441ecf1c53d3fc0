//! Statistics engine for a record-store snapshot.
//!
//! The pipeline is filter, aggregate, derive:
//! - `filter`: pick one player's performances under a format/year/tournament filter
//! - `aggregate`: fold them into raw counters and rolling windows
//! - `derived`: averages and rates with explicit zero-denominator sentinels
//! - `report`: the combined [`CalculatedStats`] value
//!
//! Built on top of that:
//! - `progression`: cumulative averages match by match
//! - `achievements`: the fixed rule table
//! - `engine`: cached queries over a [`Dataset`](crate::records::Dataset)
//! - `leaderboard`: cross-player tables and head-to-head comparison
//!
//! Everything below `engine` is pure and total: bad or missing fields degrade
//! to zero and never produce an error.

pub mod achievements;
pub mod aggregate;
pub mod derived;
pub mod engine;
pub mod filter;
pub mod leaderboard;
pub mod overs;
pub mod progression;
pub mod report;

#[cfg(test)]
pub(crate) mod test_support;

pub use achievements::{evaluate_achievements, find_achievement, Achievement, ACHIEVEMENTS};
pub use aggregate::{BowlingFigures, Counters};
pub use derived::Rate;
pub use engine::StatsEngine;
pub use filter::{filter_performances, player_performances, MatchPerformance, StatsFilter};
pub use leaderboard::{
    build_leaderboard, compare_players, ComparisonRow, Leaderboard, LeaderboardEntry,
    DEFAULT_LEADERBOARD_LIMIT,
};
pub use overs::{balls_to_overs, parse_overs_to_balls};
pub use progression::{compute_progression, ProgressionPoint};
pub use report::{compute_career_stats, compute_stats, CalculatedStats};
