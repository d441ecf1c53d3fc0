//! Error types for the cricket statistics CLI

use std::path::PathBuf;

use thiserror::Error;

use crate::cli::types::PlayerId;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Dataset file not found: {}", path.display())]
    DatasetNotFound { path: PathBuf },

    #[error("Dataset path not provided and {env_var} environment variable not set")]
    MissingDataPath { env_var: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: PlayerId },

    #[error("At least {required} players are needed for a comparison, got {given}")]
    NotEnoughPlayers { required: usize, given: usize },
}
