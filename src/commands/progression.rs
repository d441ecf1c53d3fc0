//! `progression`: cumulative averages after each career match.

use serde::Serialize;

use super::common::{to_json, truncate_name, CommandContext};
use crate::{
    records::Player,
    stats::{ProgressionPoint, StatsEngine},
    PlayerId, Result,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressionReport<'a> {
    player_id: PlayerId,
    name: &'a str,
    points: &'a [ProgressionPoint],
}

pub fn handle_progression(ctx: &CommandContext, player_id: PlayerId, as_json: bool) -> Result<()> {
    print!("{}", progression_output(ctx, player_id, as_json)?);
    Ok(())
}

pub fn progression_output(ctx: &CommandContext, player_id: PlayerId, as_json: bool) -> Result<String> {
    let player = ctx.require_player(player_id)?;
    let points = StatsEngine::new(&ctx.dataset).progression(player_id);

    if as_json {
        to_json(&ProgressionReport {
            player_id,
            name: &player.name,
            points: &points,
        })
    } else {
        Ok(render_progression(player, &points))
    }
}

pub fn render_progression(player: &Player, points: &[ProgressionPoint]) -> String {
    let mut out = format!("Career progression: {}\n", truncate_name(&player.name, 40));
    if points.is_empty() {
        out.push_str("No matches played.\n");
        return out;
    }

    out.push_str(&format!("{:<8} {:<10} {:<10}\n", "Match", "Bat Avg", "Bowl Avg"));
    out.push_str(&format!("{:<8} {:<10} {:<10}\n", "-----", "-------", "--------"));
    for point in points {
        out.push_str(&format!(
            "{:<8} {:<10} {:<10}\n",
            point.match_number,
            point.batting_average.to_string(),
            point.bowling_average.to_string()
        ));
    }
    out
}
