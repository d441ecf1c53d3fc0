//! `stats`: the full stat sheet for one player under a filter.

use std::collections::BTreeMap;

use serde::Serialize;

use super::common::{describe_filter, to_json, CommandContext};
use crate::{
    records::Player,
    stats::{Achievement, CalculatedStats, StatsEngine, StatsFilter},
    PlayerId, Result,
};

/// JSON shape of the sheet: the stats plus the ids of unlocked achievements.
#[derive(Debug, Serialize)]
pub struct PlayerSheet<'a> {
    #[serde(flatten)]
    pub stats: &'a CalculatedStats,
    pub achievements: Vec<&'static str>,
}

/// Print the stat sheet as text or JSON.
pub fn handle_player_stats(
    ctx: &CommandContext,
    player_id: PlayerId,
    filter: &StatsFilter,
    as_json: bool,
) -> Result<()> {
    print!("{}", player_stats_output(ctx, player_id, filter, as_json)?);
    Ok(())
}

pub fn player_stats_output(
    ctx: &CommandContext,
    player_id: PlayerId,
    filter: &StatsFilter,
    as_json: bool,
) -> Result<String> {
    let player = ctx.require_player(player_id)?;
    ctx.check_filter(filter);
    let engine = StatsEngine::new(&ctx.dataset);
    let stats = engine.stats(player_id, filter);
    // Served from the engine cache filled by the line above.
    let unlocked = engine.achievements(player, filter);

    if as_json {
        to_json(&PlayerSheet {
            stats: stats.as_ref(),
            achievements: unlocked.iter().map(|a| a.id).collect(),
        })
    } else {
        Ok(render_player_stats(player, &stats, &unlocked))
    }
}

/// Text stat sheet. Sentinel rates print as `∞` and `–`.
pub fn render_player_stats(
    player: &Player,
    stats: &CalculatedStats,
    unlocked: &[&Achievement],
) -> String {
    let c = &stats.counters;
    let mut lines = vec![format!(
        "{} (#{}) [{}]",
        player.name,
        player.id,
        describe_filter(&stats.filter)
    )];
    if !stats.has_played() {
        lines.push("No matches played.".to_string());
        return join_lines(lines);
    }

    lines.push(format!("Matches: {}  Player of the match: {}", c.matches, c.motm));
    lines.push(String::new());
    lines.push("Batting".to_string());
    lines.push(format!(
        "  Innings {}  Not out {}  Runs {}  HS {}  Avg {}  SR {}",
        c.innings_batted,
        c.not_outs,
        c.runs,
        c.highest_score,
        stats.batting_average,
        stats.batting_strike_rate
    ));
    lines.push(format!(
        "  100s {}  50s {}  25s {}  Ducks {}  4s {}  6s {}",
        c.hundreds, c.fifties, c.twenty_fives, c.ducks, c.fours, c.sixes
    ));
    lines.push(format!(
        "  Last 5: {}",
        recent(&c.last5_batting_scores, |r| r.to_string())
    ));

    lines.push(String::new());
    lines.push("Bowling".to_string());
    lines.push(format!(
        "  Innings {}  Overs {}  Runs {}  Wkts {}  Best {}",
        c.innings_bowled, stats.overs, c.runs_conceded, c.wickets, stats.best_bowling_figures
    ));
    lines.push(format!(
        "  Avg {}  Econ {}  SR {}  3w {}  5w {}  Hat-tricks {}",
        stats.bowling_average,
        stats.economy,
        stats.bowling_strike_rate,
        c.three_wicket_hauls,
        c.five_wicket_hauls,
        c.hat_tricks
    ));
    lines.push(format!(
        "  Last 5: {}",
        recent(&c.last5_bowling_figures, |f| f.clone())
    ));

    lines.push(String::new());
    lines.push(format!(
        "Fielding: Catches {}  Stumpings {}  Run outs {}",
        c.catches, c.stumpings, c.run_outs
    ));

    if !c.dismissal_kinds.is_empty() {
        let kinds: Vec<String> = c
            .dismissal_kinds
            .iter()
            .map(|(kind, n)| format!("{} {}", kind, n))
            .collect();
        lines.push(format!("Dismissals: {}", kinds.join(", ")));
    }
    lines.extend(top_names("Most dismissed by", &c.dismissed_by_bowlers));
    lines.extend(top_names("Most caught by", &c.caught_by_fielders));

    let names: Vec<&str> = unlocked.iter().map(|a| a.name).collect();
    let names = if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    };
    lines.push(format!("Achievements: {}", names));
    join_lines(lines)
}

fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn recent<T>(window: &[Option<T>], show: impl Fn(&T) -> String) -> String {
    if window.is_empty() {
        return "-".to_string();
    }
    window
        .iter()
        .map(|entry| entry.as_ref().map_or_else(|| "-".to_string(), &show))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Up to three names, most frequent first, ties alphabetical.
fn top_names(label: &str, counts: &BTreeMap<String, u32>) -> Option<String> {
    if counts.is_empty() {
        return None;
    }
    let mut ranked: Vec<(&String, &u32)> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1));
    let names: Vec<String> = ranked
        .into_iter()
        .take(3)
        .map(|(name, n)| format!("{} ({})", name, n))
        .collect();
    Some(format!("{}: {}", label, names.join(", ")))
}
