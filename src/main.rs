//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::{Context, Result};
use clap::Parser;
use cricket_stats::{
    cli::{Commands, CricketStats},
    commands::{
        achievements::handle_achievements, common::CommandContext, compare::handle_compare,
        filters::handle_filters, leaderboard::handle_leaderboard,
        player_stats::handle_player_stats, progression::handle_progression,
    },
    StatsFilter,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Run the CLI.
fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let app = CricketStats::parse();
    let ctx = CommandContext::load(app.data)?;

    match app.command {
        Commands::Stats {
            player,
            filters,
            json,
        } => handle_player_stats(&ctx, player, &StatsFilter::from(filters), json)?,

        Commands::Progression { player, json } => handle_progression(&ctx, player, json)?,

        Commands::Achievements {
            player,
            filters,
            career,
            json,
        } => handle_achievements(&ctx, player, &StatsFilter::from(filters), career, json)?,

        Commands::Leaderboard {
            filters,
            limit,
            json,
        } => handle_leaderboard(&ctx, &StatsFilter::from(filters), limit, json)?,

        Commands::Compare {
            players,
            filters,
            json,
        } => handle_compare(&ctx, &players, &StatsFilter::from(filters), json)?,

        Commands::Filters { json } => handle_filters(&ctx, json)?,
    }

    Ok(())
}
