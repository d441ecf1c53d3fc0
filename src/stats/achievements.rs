//! Named achievements evaluated against computed statistics.
//!
//! The rule table is fixed and ordered. Each rule is a plain predicate over
//! `(player, stats)`; evaluation has no side effects and nothing is stored,
//! so unlocked state is recomputed on every query. Rules judge whatever
//! stats they are given: pass career stats for career achievements, or
//! filtered stats to ask "unlocked within this format/season".

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::report::CalculatedStats;
use crate::cli::types::MatchId;
use crate::records::{Performance, Player};


type Condition = fn(&Player, &CalculatedStats) -> bool;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    condition: Condition,
}

impl Achievement {
    pub fn is_unlocked(&self, player: &Player, stats: &CalculatedStats) -> bool {
        (self.condition)(player, stats)
    }
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "centurion",
        name: "Centurion",
        description: "Score a century (100+ runs)",
        condition: centurion,
    },
    Achievement {
        id: "half-centurion",
        name: "Half-Centurion",
        description: "Score a half-century (50+ runs)",
        condition: half_centurion,
    },
    Achievement {
        id: "the-wall",
        name: "The Wall",
        description: "3 consecutive scores of 25+ runs",
        condition: the_wall,
    },
    Achievement {
        id: "finisher",
        name: "Finisher",
        description: "Score 20+ runs with SR 200+",
        condition: finisher,
    },
    Achievement {
        id: "hat-trick",
        name: "Hat-trick Hero",
        description: "Take a hat-trick (3 wickets in 3 balls)",
        condition: hat_trick_hero,
    },
    Achievement {
        id: "five-fer",
        name: "Five-fer",
        description: "Take 5 wickets in an innings",
        condition: five_fer,
    },
    Achievement {
        id: "three-fer",
        name: "Three-fer",
        description: "Take 3 wickets in an innings",
        condition: three_fer,
    },
    Achievement {
        id: "all-rounder",
        name: "All-Rounder",
        description: "Score 25+ runs and take 2+ wickets in same match",
        condition: all_rounder,
    },
    Achievement {
        id: "miser",
        name: "Miser",
        description: "Economy rate under 3 in an innings (min 2 overs)",
        condition: miser,
    },
    Achievement {
        id: "safe-hands",
        name: "Safe Hands",
        description: "Take 3 catches in a match",
        condition: safe_hands,
    },
    Achievement {
        id: "duck",
        name: "Duck",
        description: "Get out for 0 runs",
        condition: duck,
    },
];

pub fn find_achievement(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Achievements unlocked by `stats`, in table order.
pub fn unlocked_achievements(
    player: &Player,
    stats: &CalculatedStats,
) -> Vec<&'static Achievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| a.is_unlocked(player, stats))
        .collect()
}

/// Ids of the achievements unlocked by `stats`.
pub fn evaluate_achievements(player: &Player, stats: &CalculatedStats) -> BTreeSet<&'static str> {
    unlocked_achievements(player, stats)
        .into_iter()
        .map(|a| a.id)
        .collect()
}

fn performances(stats: &CalculatedStats) -> impl Iterator<Item = &Performance> {
    stats.performances.iter().map(|p| &p.performance)
}

/// Fold each match's performances into one total.
fn per_match<T, F>(stats: &CalculatedStats, mut add: F) -> BTreeMap<MatchId, T>
where
    T: Default,
    F: FnMut(&mut T, &Performance),
{
    let mut totals: BTreeMap<MatchId, T> = BTreeMap::new();
    for p in performances(stats) {
        add(totals.entry(p.match_id).or_default(), p);
    }
    totals
}

fn centurion(_: &Player, stats: &CalculatedStats) -> bool {
    stats.counters.hundreds > 0
}

fn half_centurion(_: &Player, stats: &CalculatedStats) -> bool {
    stats.counters.fifties > 0
}

fn the_wall(_: &Player, stats: &CalculatedStats) -> bool {
    let recent = &stats.counters.last5_batting_scores;
    recent.len() >= 3 && recent[..3].iter().all(|s| matches!(s, Some(r) if *r >= 25))
}

fn finisher(_: &Player, stats: &CalculatedStats) -> bool {
    performances(stats).filter(|p| p.batted()).any(|p| {
        let runs = p.runs.unwrap_or(0);
        let balls = p.balls_faced.unwrap_or(0);
        runs >= 20 && balls > 0 && f64::from(runs) / f64::from(balls) * 100.0 >= 200.0
    })
}

fn hat_trick_hero(_: &Player, stats: &CalculatedStats) -> bool {
    performances(stats).any(|p| p.hat_trick)
}

fn five_fer(_: &Player, stats: &CalculatedStats) -> bool {
    stats.counters.five_wicket_hauls > 0
}

fn three_fer(_: &Player, stats: &CalculatedStats) -> bool {
    stats.counters.three_wicket_hauls > 0
}

fn all_rounder(_: &Player, stats: &CalculatedStats) -> bool {
    per_match(stats, |(runs, wickets): &mut (u32, u32), p| {
        *runs = runs.saturating_add(p.runs_scored());
        *wickets = wickets.saturating_add(p.wickets_taken());
    })
    .values()
    .any(|&(runs, wickets)| runs >= 25 && wickets >= 2)
}

fn miser(_: &Player, stats: &CalculatedStats) -> bool {
    performances(stats).filter(|p| p.bowled()).any(|p| {
        let balls = p.balls_bowled();
        let runs = p.runs_conceded.unwrap_or(0);
        balls >= 12 && f64::from(runs) / (f64::from(balls) / 6.0) < 3.0
    })
}

fn safe_hands(_: &Player, stats: &CalculatedStats) -> bool {
    per_match(stats, |catches: &mut u32, p| {
        *catches = catches.saturating_add(p.catches.unwrap_or(0));
    })
    .values()
    .any(|&catches| catches >= 3)
}

fn duck(_: &Player, stats: &CalculatedStats) -> bool {
    stats.counters.ducks > 0
}
