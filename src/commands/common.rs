//! Shared helpers for command handlers.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;

use super::resolve_data_path;
use crate::{
    records::{Dataset, Player},
    stats::StatsFilter,
    PlayerId, Result,
};

/// The dataset every command reads, plus where it came from.
pub struct CommandContext {
    pub path: PathBuf,
    pub dataset: Dataset,
}

impl CommandContext {
    /// Resolve the dataset path and load it.
    pub fn load(data: Option<PathBuf>) -> Result<Self> {
        let path = resolve_data_path(data)?;
        Self::from_path(&path)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let dataset = Dataset::load(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            dataset,
        })
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            path: PathBuf::new(),
            dataset,
        }
    }

    pub fn require_player(&self, id: PlayerId) -> Result<&Player> {
        self.dataset.require_player(id).map_err(|e| {
            warn!(player = %id, "player not in dataset");
            e
        })
    }

    /// Warn when a tournament filter names nothing in the dataset.
    pub fn check_filter(&self, filter: &StatsFilter) {
        if let Some(name) = filter.tournament.as_deref() {
            if self.dataset.tournament_by_name(name).is_none() {
                warn!(tournament = name, "unknown tournament, filter matches no matches");
            }
        }
    }
}

/// Pretty JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

/// Human-readable summary of the active filter.
pub fn describe_filter(filter: &StatsFilter) -> String {
    let mut parts = Vec::new();
    if let Some(format) = &filter.format {
        parts.push(format.clone());
    }
    if let Some(year) = filter.year {
        parts.push(year.to_string());
    }
    if let Some(tournament) = &filter.tournament {
        parts.push(tournament.clone());
    }
    if parts.is_empty() {
        "career".to_string()
    } else {
        parts.join(", ")
    }
}

pub fn truncate_name(name: &str, width: usize) -> String {
    name.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::Year;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_describe_filter() {
        assert_eq!(describe_filter(&StatsFilter::career()), "career");
        let filter = StatsFilter::career()
            .with_format("T20")
            .with_year(Year::new(2024))
            .with_tournament("Summer Cup");
        assert_eq!(describe_filter(&filter), "T20, 2024, Summer Cup");
    }

    #[test]
    fn test_context_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cricket_stats.json");
        fs::write(&path, r#"{"players":[{"id":7,"name":"Dev"}]}"#).unwrap();

        let ctx = CommandContext::load(Some(path.clone())).unwrap();
        assert_eq!(ctx.path, path);
        assert_eq!(ctx.require_player(PlayerId::new(7)).unwrap().name, "Dev");
        assert!(ctx.require_player(PlayerId::new(8)).is_err());
    }

    #[test]
    fn test_context_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(CommandContext::load(Some(path)).is_err());
    }

    #[test]
    fn test_to_json_ends_with_newline() {
        let out = to_json(&vec![1, 2]).unwrap();
        assert!(out.ends_with("]\n"));
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("Abhishek", 4), "Abhi");
        assert_eq!(truncate_name("Jo", 4), "Jo");
    }
}
