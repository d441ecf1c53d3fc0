//! Type-safe wrappers for record ids and calendar filters.

pub mod ids;
pub mod time;

pub use ids::{MatchId, PlayerId, TournamentId};
pub use time::{parse_match_date, Year};
