//! Error types for banpick

use thiserror::Error;

/// Main error type for banpick operations
#[derive(Error, Debug)]
pub enum BpError {
    /// Player has no rating for the deck and no "Other" fallback either
    #[error("Player '{player}' has no rating for '{deck}' and no \"Other\" fallback")]
    MissingFallback { player: String, deck: String },

    /// Two roster entries share the same player name
    #[error("Duplicate player in roster: {0}")]
    DuplicatePlayer(String),

    /// Roster file has a header but no player rows
    #[error("Roster contains no players")]
    EmptyRoster,

    /// Roster header is too short to hold the name and deck columns
    #[error("Roster header has {0} column(s), expected at least 2 (name, deck)")]
    MissingColumns(usize),

    /// Rating cell is not an integer
    #[error("Invalid rating for player '{player}' against '{deck}': {value:?}")]
    InvalidRating {
        player: String,
        deck: String,
        value: String,
    },

    /// Rating cell is an integer but cannot be stored as a rating
    #[error("Rating {value} for player '{player}' against '{deck}' is outside 0-255")]
    RatingOutOfBounds {
        player: String,
        deck: String,
        value: i64,
    },

    /// Interactive session received a command it does not know
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Worker pool for batch evaluation could not be started
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for banpick operations
pub type BpResult<T> = Result<T, BpError>;
