//! Career progression: cumulative averages after each match played.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::derived::{batting_average, bowling_average, Rate};
use crate::cli::types::MatchId;
use crate::records::{Match, Performance};

/// Cumulative averages after the player's `match_number`-th match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionPoint {
    /// 1-based career match number.
    pub match_number: usize,
    pub batting_average: Rate,
    pub bowling_average: Rate,
}

#[derive(Default)]
struct RunningTotals {
    innings_batted: u32,
    not_outs: u32,
    runs: u32,
    runs_conceded: u32,
    wickets: u32,
}

impl RunningTotals {
    fn add(&mut self, p: &Performance) {
        if p.batted() {
            self.innings_batted += 1;
            self.runs = self.runs.saturating_add(p.runs.unwrap_or(0));
            if !p.dismissed {
                self.not_outs += 1;
            }
        }
        if p.bowled() {
            self.runs_conceded = self.runs_conceded.saturating_add(p.runs_conceded.unwrap_or(0));
            self.wickets = self.wickets.saturating_add(p.wickets.unwrap_or(0));
        }
    }

    fn point(&self, match_number: usize) -> ProgressionPoint {
        ProgressionPoint {
            match_number,
            batting_average: batting_average(
                self.runs,
                self.innings_batted.saturating_sub(self.not_outs),
            ),
            bowling_average: bowling_average(self.runs_conceded, self.wickets),
        }
    }
}

/// One point per distinct match in `performances`, oldest match first.
///
/// Matches are looked up in `matches` for their dates; performances whose
/// match id is not in the list are dropped. Equal dates keep the order in
/// which the matches first appear in `performances`.
pub fn compute_progression<P: AsRef<Performance>>(
    performances: &[P],
    matches: &[Match],
) -> Vec<ProgressionPoint> {
    let mut by_id: HashMap<MatchId, &Match> = HashMap::new();
    for m in matches {
        by_id.entry(m.id).or_insert(m);
    }

    let mut seen = HashSet::new();
    let mut played: Vec<&Match> = performances
        .iter()
        .map(|p| p.as_ref().match_id)
        .filter(|id| seen.insert(*id))
        .filter_map(|id| by_id.get(&id).copied())
        .collect();
    played.sort_by_key(|m| m.parsed_date());

    let mut totals = RunningTotals::default();
    played
        .iter()
        .enumerate()
        .map(|(index, m)| {
            performances
                .iter()
                .map(|p| p.as_ref())
                .filter(|p| p.match_id == m.id)
                .for_each(|p| totals.add(p));
            totals.point(index + 1)
        })
        .collect()
}
