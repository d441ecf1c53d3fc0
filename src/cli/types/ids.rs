//! ID types for players, matches and tournaments.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub u64);

        impl $name {
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = StatsError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

record_id!(
    /// Type-safe wrapper for player IDs.
    ///
    /// The record store mints ids from a millisecond timestamp, so they are
    /// large integers rather than small sequence numbers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cricket_stats::PlayerId;
    ///
    /// let id: PlayerId = "1700000000000".parse().unwrap();
    /// assert_eq!(id.as_u64(), 1_700_000_000_000);
    /// assert_eq!(id.to_string(), "1700000000000");
    /// ```
    PlayerId
);

record_id!(
    /// Type-safe wrapper for match IDs
    MatchId
);

record_id!(
    /// Type-safe wrapper for tournament IDs
    TournamentId
);
