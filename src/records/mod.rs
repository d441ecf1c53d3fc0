//! Record-store snapshot types.
//!
//! The record store owns creation, editing, archiving and persistence of
//! players, matches and tournaments. This module only reads its JSON export:
//! - `types`: players, matches, performances, tournaments, archived items
//! - `dataset`: the whole snapshot and simple lookups over it

pub mod dataset;
pub mod types;

pub use dataset::Dataset;
pub use types::{
    DismissalKind, Match, Performance, Player, Team, Tournament, TournamentKind, TrashItem,
    TrashItemKind,
};
