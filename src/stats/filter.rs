//! Selection of one player's performances under a format/year/tournament filter.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::types::{parse_match_date, MatchId, PlayerId, TournamentId, Year};
use crate::records::{Match, Performance, Tournament};

#[cfg(test)]
mod tests;

/// Optional, conjunctive constraints on which matches count.
///
/// An empty filter selects the full career. Empty strings are treated the
/// same as an absent constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatsFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Year>,
    /// Tournament *name*; resolved to an id against the tournament list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament: Option<String>,
}

impl StatsFilter {
    pub fn career() -> Self {
        Self::default()
    }

    pub fn new(format: Option<String>, year: Option<Year>, tournament: Option<String>) -> Self {
        Self {
            format: format.filter(|s| !s.is_empty()),
            year,
            tournament: tournament.filter(|s| !s.is_empty()),
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn with_year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_tournament(mut self, name: impl Into<String>) -> Self {
        self.tournament = Some(name.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn is_career(&self) -> bool {
        self.format.is_none() && self.year.is_none() && self.tournament.is_none()
    }

    fn format_constraint(&self) -> Option<&str> {
        self.format.as_deref().filter(|s| !s.is_empty())
    }

    fn tournament_constraint(&self) -> Option<&str> {
        self.tournament.as_deref().filter(|s| !s.is_empty())
    }
}

/// A performance annotated with the fields of its owning match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPerformance {
    #[serde(flatten)]
    pub performance: Performance,
    pub date: String,
    pub format: String,
    pub tournament_id: Option<TournamentId>,
    pub motm_player_id: Option<PlayerId>,
}

impl MatchPerformance {
    fn annotate(performance: &Performance, m: &Match) -> Self {
        Self {
            performance: performance.clone(),
            date: m.date.clone(),
            format: m.format.clone(),
            tournament_id: m.tournament_id,
            motm_player_id: m.motm_player_id,
        }
    }

    pub fn match_id(&self) -> MatchId {
        self.performance.match_id
    }

    pub fn year(&self) -> Option<Year> {
        parse_match_date(&self.date).map(Year::of)
    }
}

impl AsRef<Performance> for MatchPerformance {
    fn as_ref(&self) -> &Performance {
        &self.performance
    }
}

/// Every performance of `player_id`, in match-list order, without filtering.
pub fn player_performances(player_id: PlayerId, matches: &[Match]) -> Vec<MatchPerformance> {
    matches
        .iter()
        .flat_map(|m| {
            m.performances
                .iter()
                .filter(move |p| p.player_id == player_id)
                .map(move |p| MatchPerformance::annotate(p, m))
        })
        .collect()
}

/// Performances of `player_id` that satisfy `filter`, oldest match first.
///
/// The sort is stable, so performances on the same date keep match-list
/// order. Undated matches sort first. A tournament name that does not
/// resolve selects nothing.
pub fn filter_performances(
    player_id: PlayerId,
    matches: &[Match],
    tournaments: &[Tournament],
    filter: &StatsFilter,
) -> Vec<MatchPerformance> {
    let tournament_id = match filter.tournament_constraint() {
        Some(name) => match tournaments.iter().find(|t| t.name == name) {
            Some(t) => Some(t.id),
            None => {
                debug!(tournament = name, "tournament filter did not resolve");
                return Vec::new();
            }
        },
        None => None,
    };

    let mut selected: Vec<MatchPerformance> = player_performances(player_id, matches)
        .into_iter()
        .filter(|p| filter.format_constraint().map_or(true, |f| p.format == f))
        .filter(|p| filter.year.map_or(true, |y| p.year() == Some(y)))
        .filter(|p| tournament_id.map_or(true, |id| p.tournament_id == Some(id)))
        .collect();

    selected.sort_by_key(|p| parse_match_date(&p.date));

    debug!(
        player = %player_id,
        ?filter,
        performances = selected.len(),
        "filtered performances"
    );
    selected
}
