//! Roster loading
//!
//! Reads the team's matchup spreadsheet (exported as CSV) into a [`Roster`].
//!
//! [`Roster`]: crate::model::Roster

mod csv_roster;

pub use csv_roster::{load_roster, read_roster, FALLBACK_ALIASES};
