//! Matchup model
//!
//! Players, their per-deck ratings, and the roster they belong to.

mod player;
mod roster;

pub use player::{Player, Rating, FALLBACK_DECK};
pub use roster::Roster;
