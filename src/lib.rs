//! banpick Library
//!
//! Ban/pick assistant for team card-game events. Given a roster where every
//! player rates their matchup against each opponent deck (1 = strongly
//! favorable, 6 = strongly unfavorable), it recommends which opponent deck to
//! ban, which four players to field, and which of those four the opponent
//! would most like to remove.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │  roster CSV     │────▶│  loader          │────▶│  model::Roster  │
//! └─────────────────┘     └──────────────────┘     └────────┬────────┘
//!                                                           │
//!                         ┌──────────────────┐     ┌────────▼────────┐
//!                         │  report          │◀────│  engine         │
//!                         │  (text / JSON)   │     │  recommend()    │
//!                         └──────────────────┘     └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`model`] - Players, matchup ratings and the roster
//! - [`engine`] - Ban selection, lineup search and risk analysis
//! - [`loader`] - CSV roster loading
//! - [`report`] - Rating table and recommendation rendering
//! - [`batch`] - Parallel evaluation of selection files
//! - [`session`] - Reloadable roster store and interactive prompt
//! - [`error`] - Error types

pub mod batch;
pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod report;
pub mod session;

pub use engine::{recommend, BanChoice, PickChoice, Recommendation, RiskAssessment};
pub use error::{BpError, BpResult};
pub use loader::{load_roster, read_roster};
pub use model::{Player, Rating, Roster, FALLBACK_DECK};
pub use report::Report;
