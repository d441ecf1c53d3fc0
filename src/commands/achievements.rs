//! `achievements`: which rules a player has unlocked.
//!
//! By default the rules judge the filtered stats; `--career` evaluates the
//! whole career regardless of any filter flags.

use serde::Serialize;

use super::common::{describe_filter, to_json, CommandContext};
use crate::{
    records::Player,
    stats::{Achievement, StatsEngine, StatsFilter, ACHIEVEMENTS},
    PlayerId, Result,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementReport<'a> {
    pub player_id: PlayerId,
    pub name: &'a str,
    pub filter: StatsFilter,
    pub unlocked: Vec<&'static Achievement>,
    pub locked: Vec<&'static Achievement>,
}

pub fn handle_achievements(
    ctx: &CommandContext,
    player_id: PlayerId,
    filter: &StatsFilter,
    career: bool,
    as_json: bool,
) -> Result<()> {
    print!("{}", achievements_output(ctx, player_id, filter, career, as_json)?);
    Ok(())
}

pub fn achievements_output(
    ctx: &CommandContext,
    player_id: PlayerId,
    filter: &StatsFilter,
    career: bool,
    as_json: bool,
) -> Result<String> {
    let player = ctx.require_player(player_id)?;
    let report = achievement_report(ctx, player, filter, career);

    if as_json {
        to_json(&report)
    } else {
        Ok(render_achievements(&report))
    }
}

pub fn achievement_report<'a>(
    ctx: &CommandContext,
    player: &'a Player,
    filter: &StatsFilter,
    career: bool,
) -> AchievementReport<'a> {
    let filter = if career {
        StatsFilter::career()
    } else {
        ctx.check_filter(filter);
        filter.clone()
    };
    let unlocked = StatsEngine::new(&ctx.dataset).achievements(player, &filter);
    let locked = ACHIEVEMENTS
        .iter()
        .filter(|a| !unlocked.iter().any(|u| u.id == a.id))
        .collect();

    AchievementReport {
        player_id: player.id,
        name: &player.name,
        filter,
        unlocked,
        locked,
    }
}

pub fn render_achievements(report: &AchievementReport<'_>) -> String {
    let mut out = format!(
        "{}: {}/{} achievements unlocked [{}]\n",
        report.name,
        report.unlocked.len(),
        ACHIEVEMENTS.len(),
        describe_filter(&report.filter)
    );
    for a in &report.unlocked {
        out.push_str(&format!("  [x] {:<16} {}\n", a.name, a.description));
    }
    for a in &report.locked {
        out.push_str(&format!("  [ ] {:<16} {}\n", a.name, a.description));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> CommandContext {
        let dataset = serde_json::from_value(json!({
            "players": [{ "id": 1, "name": "Asha", "achievements": ["duck"] }],
            "matches": [
                {
                    "id": 1, "date": "2023-05-01", "format": "ODI",
                    "performances": [{ "playerId": 1, "matchId": 1, "runs": 112, "balls": 95, "out": "yes", "dnbBowl": true }]
                },
                {
                    "id": 2, "date": "2024-05-01", "format": "T20",
                    "performances": [{ "playerId": 1, "matchId": 2, "runs": 22, "balls": 10, "out": "no", "dnbBowl": true }]
                }
            ]
        }))
        .unwrap();
        CommandContext::from_dataset(dataset)
    }

    fn unlocked_ids(out: &str) -> Vec<String> {
        let value: serde_json::Value = serde_json::from_str(out).unwrap();
        value["unlocked"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_filtered_evaluation() {
        let filter = StatsFilter::career().with_format("T20");
        let out = achievements_output(&context(), PlayerId::new(1), &filter, false, true).unwrap();
        assert_eq!(unlocked_ids(&out), vec!["finisher"]);
    }

    #[test]
    fn test_career_flag_ignores_filter() {
        let filter = StatsFilter::career().with_format("T20");
        let out = achievements_output(&context(), PlayerId::new(1), &filter, true, true).unwrap();
        assert_eq!(unlocked_ids(&out), vec!["centurion", "finisher"]);
    }

    #[test]
    fn test_stored_ids_do_not_unlock() {
        let out = achievements_output(&context(), PlayerId::new(1), &StatsFilter::career(), false, true)
            .unwrap();
        assert!(!unlocked_ids(&out).contains(&"duck".to_string()));
    }

    #[test]
    fn test_text_lists_unlocked_then_locked() {
        let out = achievements_output(&context(), PlayerId::new(1), &StatsFilter::career(), false, false)
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Asha: 2/11 achievements unlocked [career]");
        assert!(lines[1].starts_with("  [x] Centurion"));
        assert!(lines[2].starts_with("  [x] Finisher"));
        assert!(lines[3].starts_with("  [ ] Half-Centurion"));
        assert_eq!(lines.len(), 12);
    }
}
