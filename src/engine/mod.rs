//! Recommendation engine
//!
//! Turns a roster and an opponent selection into a ban, a lineup and the
//! lineup's worst-case exposure. Everything here is a pure function of its
//! inputs; a `Roster` can be shared across threads while recommendations run.

mod lineup;
mod recommend;

pub use lineup::{lineups, LINEUP_SIZE};
pub use recommend::{recommend, BanChoice, PickChoice, Recommendation, RiskAssessment};
