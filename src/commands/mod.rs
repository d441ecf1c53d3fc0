//! Command implementations for the cricket statistics CLI

pub mod achievements;
pub mod common;
pub mod compare;
pub mod filters;
pub mod leaderboard;
pub mod player_stats;
pub mod progression;


use std::path::PathBuf;

use crate::{error::StatsError, Result, DATA_PATH_ENV_VAR};

/// Application directory under the platform data dir.
pub const APP_DIR_NAME: &str = "cricket-stats";
/// File name of the record-store export inside [`APP_DIR_NAME`].
pub const DATA_FILE_NAME: &str = "cricket_stats.json";

/// Path: <data_dir>/cricket-stats/cricket_stats.json
pub fn default_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|base| base.join(APP_DIR_NAME).join(DATA_FILE_NAME))
}

/// Pick the dataset path: explicit flag, then `CRICKET_STATS_DATA`, then the
/// platform data dir.
pub fn resolve_data_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_data_path_from(
        explicit,
        std::env::var(DATA_PATH_ENV_VAR).ok(),
        default_data_path(),
    )
}

fn resolve_data_path_from(
    explicit: Option<PathBuf>,
    env_value: Option<String>,
    fallback: Option<PathBuf>,
) -> Result<PathBuf> {
    explicit
        .or_else(|| {
            env_value
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .or(fallback)
        .ok_or_else(|| StatsError::MissingDataPath {
            env_var: DATA_PATH_ENV_VAR.to_string(),
        })
}
