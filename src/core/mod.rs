//! Core utilities for the cricket statistics CLI
//!
//! - `cache`: in-memory LRU memo of computed statistics

pub mod cache;

pub use cache::{StatsCache, StatsCacheKey, DEFAULT_CACHE_CAPACITY};
