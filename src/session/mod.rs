//! Long-running use: a reloadable roster and an interactive prompt

mod prompt;
mod store;

pub use prompt::Session;
pub use store::RosterStore;
