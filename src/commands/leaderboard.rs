//! `leaderboard`: most runs and most wickets under a filter.

use super::common::{describe_filter, to_json, truncate_name, CommandContext};
use crate::{
    stats::{build_leaderboard, Leaderboard, LeaderboardEntry, StatsEngine, StatsFilter},
    Result,
};

pub fn handle_leaderboard(
    ctx: &CommandContext,
    filter: &StatsFilter,
    limit: usize,
    as_json: bool,
) -> Result<()> {
    print!("{}", leaderboard_output(ctx, filter, limit, as_json)?);
    Ok(())
}

pub fn leaderboard_output(
    ctx: &CommandContext,
    filter: &StatsFilter,
    limit: usize,
    as_json: bool,
) -> Result<String> {
    ctx.check_filter(filter);
    let engine = StatsEngine::new(&ctx.dataset);
    let board = build_leaderboard(&engine, filter, limit);

    if as_json {
        to_json(&board)
    } else {
        Ok(render_leaderboard(&board))
    }
}

pub fn render_leaderboard(board: &Leaderboard) -> String {
    let mut out = format!("Leaderboard [{}]\n\n", describe_filter(&board.filter));

    out.push_str("Most runs\n");
    write_table(&mut out, &board.most_runs, ("Runs", "Avg", "SR"), |e| {
        (e.runs, e.batting_average.to_string(), e.batting_strike_rate.to_string())
    });

    out.push_str("\nMost wickets\n");
    write_table(&mut out, &board.most_wickets, ("Wkts", "Avg", "Econ"), |e| {
        (e.wickets, e.bowling_average.to_string(), e.economy.to_string())
    });
    out
}

fn write_table<F>(
    out: &mut String,
    entries: &[LeaderboardEntry],
    headers: (&str, &str, &str),
    columns: F,
) where
    F: Fn(&LeaderboardEntry) -> (u32, String, String),
{
    if entries.is_empty() {
        out.push_str("  No matches played.\n");
        return;
    }
    out.push_str(&format!(
        "  {:<4} {:<20} {:<4} {:<6} {:<8} {:<8}\n",
        "#", "Name", "M", headers.0, headers.1, headers.2
    ));
    for entry in entries {
        let (total, first, second) = columns(entry);
        out.push_str(&format!(
            "  {:<4} {:<20} {:<4} {:<6} {:<8} {:<8}\n",
            entry.rank,
            truncate_name(&entry.name, 20),
            entry.matches,
            total,
            first,
            second
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::DEFAULT_LEADERBOARD_LIMIT;
    use serde_json::json;

    fn context() -> CommandContext {
        let dataset = serde_json::from_value(json!({
            "players": [
                { "id": 1, "name": "Asha" },
                { "id": 2, "name": "Kiran" },
                { "id": 3, "name": "Unused" }
            ],
            "matches": [{
                "id": 1, "date": "2024-01-01", "format": "T20",
                "performances": [
                    { "playerId": 1, "matchId": 1, "runs": 61, "balls": 40, "out": "yes", "dnbBowl": true },
                    { "playerId": 2, "matchId": 1, "runs": 4, "balls": 6, "out": "yes", "overs": "4.0", "runsCon": 28, "wkts": 2 }
                ]
            }]
        }))
        .unwrap();
        CommandContext::from_dataset(dataset)
    }

    #[test]
    fn test_text_tables() {
        let out = leaderboard_output(&context(), &StatsFilter::career(), DEFAULT_LEADERBOARD_LIMIT, false)
            .unwrap();

        assert!(out.starts_with("Leaderboard [career]\n"));
        let runs_row = out.lines().find(|l| l.contains("Asha")).unwrap();
        assert!(runs_row.contains("61"));
        assert!(runs_row.contains("152.50"));
        assert!(!out.contains("Unused"));
    }

    #[test]
    fn test_json_tables() {
        let out = leaderboard_output(&context(), &StatsFilter::career(), 1, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["mostRuns"].as_array().unwrap().len(), 1);
        assert_eq!(value["mostRuns"][0]["name"], "Asha");
        assert_eq!(value["mostWickets"][0]["name"], "Kiran");
        assert_eq!(value["mostWickets"][0]["economy"], 7.0);
    }

    #[test]
    fn test_filter_with_no_matches() {
        let filter = StatsFilter::career().with_format("Test");
        let out = leaderboard_output(&context(), &filter, DEFAULT_LEADERBOARD_LIMIT, false).unwrap();
        assert_eq!(out.matches("No matches played.").count(), 2);
    }
}
