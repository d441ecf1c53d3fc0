//! In-memory snapshot of the record store.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::types::{Match, Player, Tournament, TrashItem};
use crate::cli::types::{PlayerId, Year};
use crate::error::{Result, StatsError};

/// Players, matches and tournaments as persisted by the record store.
///
/// Every top-level array is optional in the stored JSON and reads as empty
/// when missing. The snapshot is never mutated by the statistics engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Dataset {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
    #[serde(default)]
    pub trash: Vec<TrashItem>,
}

impl Dataset {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a dataset export from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StatsError::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            players = dataset.players.len(),
            matches = dataset.matches.len(),
            tournaments = dataset.tournaments.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn require_player(&self, id: PlayerId) -> Result<&Player> {
        self.player(id).ok_or(StatsError::PlayerNotFound { id })
    }

    pub fn tournament_by_name(&self, name: &str) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.name == name)
    }

    /// Distinct match formats in first-seen order. Matches without a format are skipped.
    pub fn available_formats(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.matches
            .iter()
            .filter(|m| !m.format.is_empty() && seen.insert(m.format.as_str()))
            .map(|m| m.format.clone())
            .collect()
    }

    /// Distinct match years, most recent first. Undated matches are skipped.
    pub fn available_years(&self) -> Vec<Year> {
        let years: BTreeSet<Year> = self.matches.iter().filter_map(Match::year).collect();
        years.into_iter().rev().collect()
    }

    pub fn tournament_names(&self) -> Vec<String> {
        self.tournaments.iter().map(|t| t.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::MatchId;

    #[test]
    fn test_missing_arrays_read_as_empty() {
        let dataset = Dataset::from_json_str(r#"{"players":[{"id":1,"name":"Asha"}]}"#).unwrap();
        assert_eq!(dataset.players.len(), 1);
        assert!(dataset.matches.is_empty());
        assert!(dataset.tournaments.is_empty());
        assert!(dataset.trash.is_empty());
        assert!(dataset.players[0].achievements.is_empty());
    }

    #[test]
    fn test_empty_object_is_empty_dataset() {
        assert_eq!(Dataset::from_json_str("{}").unwrap(), Dataset::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            Dataset::from_json_str("[not json"),
            Err(StatsError::Json(_))
        ));
    }

    #[test]
    fn test_require_player() {
        let mut dataset = Dataset::default();
        dataset.players.push(Player::new(PlayerId::new(3), "Kiran"));

        assert_eq!(dataset.require_player(PlayerId::new(3)).unwrap().name, "Kiran");
        match dataset.require_player(PlayerId::new(4)) {
            Err(StatsError::PlayerNotFound { id }) => assert_eq!(id, PlayerId::new(4)),
            other => panic!("Expected PlayerNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_available_formats_and_years() {
        let mut dataset = Dataset::default();
        dataset.matches = vec![
            Match::new(MatchId::new(1), "2023-05-01", "T20"),
            Match::new(MatchId::new(2), "2024-05-01", "ODI"),
            Match::new(MatchId::new(3), "2022-05-01", "T20"),
            Match::new(MatchId::new(4), "", "Test"),
        ];

        assert_eq!(dataset.available_formats(), vec!["T20", "ODI", "Test"]);
        assert_eq!(
            dataset.available_years(),
            vec![Year::new(2024), Year::new(2023), Year::new(2022)]
        );
    }

    #[test]
    fn test_missing_format_is_not_listed() {
        let dataset = Dataset::from_json_str(
            r#"{ "matches": [{ "id": 1, "date": "2024-01-01" }, { "id": 2, "format": "T20" }] }"#,
        )
        .unwrap();
        assert_eq!(dataset.available_formats(), vec!["T20"]);
    }
}
