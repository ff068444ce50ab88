//! The team roster

use super::player::Player;
use crate::error::{BpError, BpResult};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Ordered list of players, unique by name.
///
/// Order only matters for enumeration and tie-breaking in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster, rejecting duplicate player names
    pub fn new(players: Vec<Player>) -> BpResult<Self> {
        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player.name.as_str()) {
                return Err(BpError::DuplicatePlayer(player.name.clone()));
            }
        }
        Ok(Self { players })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by name
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Every deck any player has an explicit rating for, sorted
    pub fn known_opponents(&self) -> Vec<String> {
        self.players
            .iter()
            .flat_map(Player::explicit_decks)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
