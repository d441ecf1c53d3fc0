//! `compare`: head-to-head stats for two or three players.

use super::common::{describe_filter, to_json, truncate_name, CommandContext};
use crate::{
    stats::{compare_players, CalculatedStats, ComparisonRow, StatsEngine, StatsFilter},
    PlayerId, Result,
};

pub fn handle_compare(
    ctx: &CommandContext,
    player_ids: &[PlayerId],
    filter: &StatsFilter,
    as_json: bool,
) -> Result<()> {
    print!("{}", compare_output(ctx, player_ids, filter, as_json)?);
    Ok(())
}

pub fn compare_output(
    ctx: &CommandContext,
    player_ids: &[PlayerId],
    filter: &StatsFilter,
    as_json: bool,
) -> Result<String> {
    ctx.check_filter(filter);
    let engine = StatsEngine::new(&ctx.dataset);
    let rows = compare_players(&engine, player_ids, filter)?;

    if as_json {
        to_json(&rows)
    } else {
        Ok(render_comparison(&rows, filter))
    }
}

type Metric = (&'static str, fn(&CalculatedStats) -> String);

const METRICS: &[Metric] = &[
    ("Matches", |s| s.counters.matches.to_string()),
    ("Runs", |s| s.counters.runs.to_string()),
    ("Highest", |s| s.counters.highest_score.to_string()),
    ("Bat Avg", |s| s.batting_average.to_string()),
    ("Bat SR", |s| s.batting_strike_rate.to_string()),
    ("50s", |s| s.counters.fifties.to_string()),
    ("100s", |s| s.counters.hundreds.to_string()),
    ("Wickets", |s| s.counters.wickets.to_string()),
    ("Best", |s| s.best_bowling_figures.clone()),
    ("Bowl Avg", |s| s.bowling_average.to_string()),
    ("Economy", |s| s.economy.to_string()),
    ("Catches", |s| s.counters.catches.to_string()),
];

pub fn render_comparison(rows: &[ComparisonRow<'_>], filter: &StatsFilter) -> String {
    let mut out = format!("Head to head [{}]\n", describe_filter(filter));

    out.push_str(&format!("{:<10}", ""));
    for row in rows {
        out.push_str(&format!(" {:<14}", truncate_name(&row.player.name, 14)));
    }
    out.push('\n');

    for (label, metric) in METRICS {
        out.push_str(&format!("{:<10}", label));
        for row in rows {
            out.push_str(&format!(" {:<14}", metric(row.stats.as_ref())));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;
    use serde_json::json;

    fn context() -> CommandContext {
        let dataset = serde_json::from_value(json!({
            "players": [{ "id": 1, "name": "Asha" }, { "id": 2, "name": "Kiran" }],
            "matches": [{
                "id": 1, "date": "2024-01-01", "format": "T20",
                "performances": [
                    { "playerId": 1, "matchId": 1, "runs": 33, "balls": 20, "out": "yes", "catches": 2, "dnbBowl": true },
                    { "playerId": 2, "matchId": 1, "dnbBat": true, "overs": "3.0", "runsCon": 15, "wkts": 3 }
                ]
            }]
        }))
        .unwrap();
        CommandContext::from_dataset(dataset)
    }

    #[test]
    fn test_text_columns_follow_argument_order() {
        let ids = [PlayerId::new(2), PlayerId::new(1)];
        let out = compare_output(&context(), &ids, &StatsFilter::career(), false).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[1].trim_start().starts_with("Kiran"));
        let runs = lines.iter().find(|l| l.starts_with("Runs")).unwrap();
        assert_eq!(runs.split_whitespace().collect::<Vec<_>>(), vec!["Runs", "0", "33"]);
        let best = lines.iter().find(|l| l.starts_with("Best")).unwrap();
        assert_eq!(best.split_whitespace().collect::<Vec<_>>(), vec!["Best", "3/15", "-"]);
    }

    #[test]
    fn test_json_rows() {
        let ids = [PlayerId::new(1), PlayerId::new(2)];
        let out = compare_output(&context(), &ids, &StatsFilter::career(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["player"]["name"], "Asha");
        assert_eq!(value[0]["stats"]["catches"], 2);
        assert_eq!(value[1]["stats"]["bowlingAverage"], 5.0);
    }

    #[test]
    fn test_single_known_player_is_an_error() {
        let ids = [PlayerId::new(1), PlayerId::new(5)];
        match compare_output(&context(), &ids, &StatsFilter::career(), false) {
            Err(StatsError::NotEnoughPlayers { given, .. }) => assert_eq!(given, 1),
            other => panic!("Expected NotEnoughPlayers, got {:?}", other),
        }
    }
}
