//! A player and their matchup table

use crate::error::{BpError, BpResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// Ordinal matchup rating: 1 = strongly favorable, 6 = strongly unfavorable.
pub type Rating = u8;

/// Reserved matchup key used for any deck a player has no explicit rating for.
pub const FALLBACK_DECK: &str = "Other";

/// A roster member and how their deck fares against each opponent deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    /// Archetype the player brings. Display only.
    pub deck: String,
    ratings: BTreeMap<String, Rating>,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        deck: impl Into<String>,
        ratings: BTreeMap<String, Rating>,
    ) -> Self {
        Self {
            name: name.into(),
            deck: deck.into(),
            ratings,
        }
    }

    /// Rating to use against `opponent_deck`.
    ///
    /// Falls back to the player's `"Other"` entry when the deck is not
    /// listed. A table with neither is malformed and yields
    /// [`BpError::MissingFallback`].
    pub fn rating(&self, opponent_deck: &str) -> BpResult<Rating> {
        self.ratings
            .get(opponent_deck)
            .or_else(|| self.fallback_entry())
            .copied()
            .ok_or_else(|| BpError::MissingFallback {
                player: self.name.clone(),
                deck: opponent_deck.to_string(),
            })
    }

    /// The `"Other"` rating, if the table has one
    pub fn fallback(&self) -> Option<Rating> {
        self.fallback_entry().copied()
    }

    fn fallback_entry(&self) -> Option<&Rating> {
        self.ratings.get(FALLBACK_DECK)
    }

    /// Decks this player has an explicit rating for, excluding the fallback
    pub fn explicit_decks(&self) -> impl Iterator<Item = &str> {
        self.ratings
            .keys()
            .map(String::as_str)
            .filter(|deck| *deck != FALLBACK_DECK)
    }

    /// Sum of this player's ratings over every slot of `opponents`
    pub fn score_against(&self, opponents: &[String]) -> BpResult<u32> {
        opponents
            .iter()
            .try_fold(0u32, |total, deck| -> BpResult<u32> {
                Ok(total + u32::from(self.rating(deck)?))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(entries: &[(&str, Rating)]) -> Player {
        let ratings = entries
            .iter()
            .map(|(deck, r)| (deck.to_string(), *r))
            .collect();
        Player::new("Kai", "Lost Box", ratings)
    }

    #[test]
    fn test_explicit_rating() {
        let p = player(&[("Gardevoir", 2), ("Other", 3)]);
        assert_eq!(p.rating("Gardevoir").unwrap(), 2);
    }

    #[test]
    fn test_unlisted_deck_uses_fallback() {
        let p = player(&[("Gardevoir", 2), ("Other", 5)]);
        assert_eq!(p.rating("Miraidon").unwrap(), 5);
        assert_eq!(p.rating("").unwrap(), 5);
        assert_eq!(p.fallback(), Some(5));
    }

    #[test]
    fn test_missing_fallback_is_an_error() {
        let p = player(&[("Gardevoir", 2)]);
        assert_eq!(p.rating("Gardevoir").unwrap(), 2);
        match p.rating("Miraidon") {
            Err(BpError::MissingFallback { player, deck }) => {
                assert_eq!(player, "Kai");
                assert_eq!(deck, "Miraidon");
            }
            other => panic!("expected MissingFallback, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_decks_skip_fallback() {
        let p = player(&[("Gardevoir", 2), ("Other", 3), ("Charizard", 4)]);
        let decks: Vec<&str> = p.explicit_decks().collect();
        assert_eq!(decks, vec!["Charizard", "Gardevoir"]);
    }

    #[test]
    fn test_score_against_counts_every_slot() {
        let p = player(&[("A", 1), ("B", 6), ("Other", 3)]);
        let slots: Vec<String> = ["A", "B", "B", "Z"].iter().map(|s| s.to_string()).collect();
        assert_eq!(p.score_against(&slots).unwrap(), 1 + 6 + 6 + 3);
        assert_eq!(p.score_against(&[]).unwrap(), 0);
    }
}
