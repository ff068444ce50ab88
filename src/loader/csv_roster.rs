//! CSV roster reader
//!
//! Layout: a header row, then one row per player.
//!
//! ```text
//! Player,Deck,Gardevoir,Charizard,Other
//! Kai,Lost Box,2,4,3
//! Mio,Dragapult,5,1,3
//! ```
//!
//! The first two columns are always the player name and deck label, whatever
//! their header says. Every further column is an opponent deck.

use crate::error::{BpError, BpResult};
use crate::model::{Player, Rating, Roster, FALLBACK_DECK};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::ops::RangeInclusive;
use std::path::Path;

/// Header spellings treated as the `"Other"` fallback column
pub const FALLBACK_ALIASES: &[&str] = &[FALLBACK_DECK, "其它"];

const VALID_RATINGS: RangeInclusive<Rating> = 1..=6;

/// Load a roster from a CSV file
pub fn load_roster(path: &Path) -> BpResult<Roster> {
    info!("Reading roster: {:?}", path);
    let file = File::open(path)?;
    let roster = read_roster(file)?;
    info!(
        "Loaded {} players, {} known opponent decks",
        roster.len(),
        roster.known_opponents().len()
    );
    Ok(roster)
}

/// Parse a roster from any CSV source
pub fn read_roster<R: Read>(source: R) -> BpResult<Roster> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    if headers.len() < 2 {
        return Err(BpError::MissingColumns(headers.len()));
    }

    let decks: Vec<&str> = headers.iter().skip(2).map(normalize_deck).collect();
    for (idx, deck) in decks.iter().enumerate() {
        if decks[..idx].contains(deck) {
            warn!(
                "Column {}: deck {:?} repeats an earlier column, keeping the first",
                idx + 3,
                deck
            );
        }
    }
    if !decks.contains(&FALLBACK_DECK) {
        warn!("Roster has no \"{}\" column; unlisted decks cannot be rated", FALLBACK_DECK);
    }
    debug!("Opponent columns: {:?}", decks);

    let mut players = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let name = &record[0];
        if name.is_empty() {
            warn!("Row {}: empty player name, skipping", row + 2);
            continue;
        }

        let mut ratings = BTreeMap::new();
        for (deck, value) in decks.iter().zip(record.iter().skip(2)) {
            let rating = parse_rating(name, deck, value)?;
            if !VALID_RATINGS.contains(&rating) {
                warn!(
                    "Row {}: {} rates {} as {}, outside {}-{}",
                    row + 2,
                    name,
                    deck,
                    rating,
                    VALID_RATINGS.start(),
                    VALID_RATINGS.end()
                );
            }
            ratings.entry(deck.to_string()).or_insert(rating);
        }

        players.push(Player::new(name, &record[1], ratings));
    }

    if players.is_empty() {
        return Err(BpError::EmptyRoster);
    }

    Roster::new(players)
}

fn normalize_deck(header: &str) -> &str {
    if FALLBACK_ALIASES.contains(&header) {
        FALLBACK_DECK
    } else {
        header
    }
}

fn parse_rating(player: &str, deck: &str, value: &str) -> BpResult<Rating> {
    let parsed = value.parse::<i64>().map_err(|_| BpError::InvalidRating {
        player: player.to_string(),
        deck: deck.to_string(),
        value: value.to_string(),
    })?;
    Rating::try_from(parsed).map_err(|_| BpError::RatingOutOfBounds {
        player: player.to_string(),
        deck: deck.to_string(),
        value: parsed,
    })
}
