//! Cricket statistics and achievements library
//!
//! Reads the JSON export of a cricket record store (players, matches,
//! tournaments) and derives everything else from it: career and filtered
//! stat sheets, progression series, achievements, leaderboards and
//! head-to-head comparisons.
//!
//! ## Features
//!
//! - **Filtering**: narrow a player's matches by format, calendar year or tournament
//! - **Aggregation**: batting, bowling and fielding totals, milestones and recent form
//! - **Derived Metrics**: averages and rates with explicit "infinite"/"undefined" sentinels
//! - **Progression**: cumulative averages after every career match
//! - **Achievements**: a fixed, ordered rule table evaluated on demand
//!
//! ## Quick Start
//!
//! ```rust
//! use cricket_stats::{records::Dataset, stats::{Rate, StatsEngine}, PlayerId};
//!
//! # fn example() -> cricket_stats::Result<()> {
//! let dataset = Dataset::from_json_str(r#"{
//!     "players": [{ "id": 1, "name": "Asha" }],
//!     "matches": [{
//!         "id": 1, "date": "2024-02-01", "format": "T20",
//!         "performances": [{ "playerId": 1, "matchId": 1, "runs": 45, "balls": 30, "out": "no" }]
//!     }]
//! }"#)?;
//!
//! let engine = StatsEngine::new(&dataset);
//! let stats = engine.career_stats(PlayerId::new(1));
//! assert_eq!(stats.batting_average, Rate::Infinite);
//! assert_eq!(stats.batting_strike_rate.to_string(), "150.00");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a dataset export to avoid passing `--data` every time:
//! ```bash
//! export CRICKET_STATS_DATA=~/cricket_stats.json
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod records;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{MatchId, PlayerId, TournamentId, Year};
pub use error::{Result, StatsError};
pub use records::{Dataset, Match, Performance, Player, Tournament};
pub use stats::{
    compute_career_stats, compute_progression, compute_stats, evaluate_achievements,
    CalculatedStats, Rate, StatsEngine, StatsFilter,
};

pub const DATA_PATH_ENV_VAR: &str = "CRICKET_STATS_DATA";
