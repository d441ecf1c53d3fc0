//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{PlayerId, Year};

use crate::stats::{StatsFilter, DEFAULT_LEADERBOARD_LIMIT};

/// Common filtering arguments shared between commands
#[derive(Debug, Clone, Default, Args)]
pub struct CommonFilters {
    /// Only matches of this format, e.g. `T20` (exact match).
    #[clap(long, short)]
    pub format: Option<String>,

    /// Only matches played in this calendar year.
    #[clap(long, short)]
    pub year: Option<Year>,

    /// Only matches of the tournament with this exact name.
    #[clap(long, short)]
    pub tournament: Option<String>,
}

impl From<CommonFilters> for StatsFilter {
    fn from(filters: CommonFilters) -> Self {
        StatsFilter::new(filters.format, filters.year, filters.tournament)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Full stat sheet for one player: batting, bowling, fielding and recent form.
    Stats {
        /// Player id.
        #[clap(long, short)]
        player: PlayerId,

        #[clap(flatten)]
        filters: CommonFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Cumulative batting and bowling averages after each career match.
    ///
    /// Always covers the whole career; filter flags do not apply.
    Progression {
        /// Player id.
        #[clap(long, short)]
        player: PlayerId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Achievements unlocked by one player.
    Achievements {
        /// Player id.
        #[clap(long, short)]
        player: PlayerId,

        #[clap(flatten)]
        filters: CommonFilters,

        /// Evaluate against the whole career, ignoring filter flags.
        #[clap(long)]
        career: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Most runs and most wickets tables.
    Leaderboard {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Rows per table.
        #[clap(long, short, default_value_t = DEFAULT_LEADERBOARD_LIMIT)]
        limit: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Head-to-head stats for two or three players (repeat `--player`).
    Compare {
        /// Player id (repeatable): `-p 1 -p 2`.
        #[clap(long = "player", short = 'p', required = true)]
        players: Vec<PlayerId>,

        #[clap(flatten)]
        filters: CommonFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the formats, years and tournaments present in the dataset.
    Filters {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

/// Top-level CLI definition
#[derive(Debug, Parser)]
#[clap(name = "cricket-stats", version, about = "Cricket statistics and achievements")]
pub struct CricketStats {
    /// Dataset JSON file (or set `CRICKET_STATS_DATA` env var).
    #[clap(long, short, global = true)]
    pub data: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
