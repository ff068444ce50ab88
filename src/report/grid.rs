//! Rating table for display

use crate::error::BpResult;
use crate::model::{Rating, Roster};
use serde::{Deserialize, Serialize};

/// Display bucket for a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingBand {
    StrongFavorite,
    Favorite,
    Even,
    Unfavored,
    StrongUnfavored,
    Avoid,
}

impl RatingBand {
    pub fn from_rating(rating: Rating) -> Self {
        match rating {
            0 | 1 => RatingBand::StrongFavorite,
            2 => RatingBand::Favorite,
            3 => RatingBand::Even,
            4 => RatingBand::Unfavored,
            5 => RatingBand::StrongUnfavored,
            _ => RatingBand::Avoid,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RatingBand::StrongFavorite => "strong favorite",
            RatingBand::Favorite => "favorite",
            RatingBand::Even => "even",
            RatingBand::Unfavored => "unfavored",
            RatingBand::StrongUnfavored => "strongly unfavored",
            RatingBand::Avoid => "avoid",
        }
    }

    /// ANSI SGR sequence for a table cell in this band
    pub fn ansi_style(self) -> &'static str {
        match self {
            RatingBand::StrongFavorite => "\x1b[42;97m",
            RatingBand::Favorite => "\x1b[102;30m",
            RatingBand::Even => "\x1b[44;97m",
            RatingBand::Unfavored => "\x1b[103;30m",
            RatingBand::StrongUnfavored => "\x1b[101;30m",
            RatingBand::Avoid => "\x1b[41;97;1m",
        }
    }

    pub fn all() -> [RatingBand; 6] {
        [
            RatingBand::StrongFavorite,
            RatingBand::Favorite,
            RatingBand::Even,
            RatingBand::Unfavored,
            RatingBand::StrongUnfavored,
            RatingBand::Avoid,
        ]
    }
}

/// One roster member's ratings, one per selected slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    /// `Name (Deck)`
    pub label: String,
    pub ratings: Vec<Rating>,
}

/// Player x selected-slot rating table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingGrid {
    /// `Deck (#n)`, 1-based, one per slot so duplicates stay distinguishable
    pub columns: Vec<String>,
    pub rows: Vec<GridRow>,
}

impl RatingGrid {
    pub fn build(roster: &Roster, selection: &[String]) -> BpResult<Self> {
        let columns = selection
            .iter()
            .enumerate()
            .map(|(idx, deck)| format!("{} (#{})", deck, idx + 1))
            .collect();

        let rows = roster
            .players()
            .iter()
            .map(|player| {
                let ratings = selection
                    .iter()
                    .map(|deck| player.rating(deck))
                    .collect::<BpResult<Vec<_>>>()?;
                Ok(GridRow {
                    label: format!("{} ({})", player.name, player.deck),
                    ratings,
                })
            })
            .collect::<BpResult<Vec<_>>>()?;

        Ok(Self { columns, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::read_roster;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(RatingBand::from_rating(1), RatingBand::StrongFavorite);
        assert_eq!(RatingBand::from_rating(2), RatingBand::Favorite);
        assert_eq!(RatingBand::from_rating(3), RatingBand::Even);
        assert_eq!(RatingBand::from_rating(4), RatingBand::Unfavored);
        assert_eq!(RatingBand::from_rating(5), RatingBand::StrongUnfavored);
        assert_eq!(RatingBand::from_rating(6), RatingBand::Avoid);
        assert_eq!(RatingBand::from_rating(9), RatingBand::Avoid);
    }

    #[test]
    fn test_grid_has_a_column_per_slot() {
        let roster = read_roster(
            "Player,Deck,Gardevoir,Other\nKai,Lost Box,2,3\nMio,Dragapult,5,4\n".as_bytes(),
        )
        .unwrap();
        let selection: Vec<String> = ["Gardevoir", "Miraidon", "Gardevoir"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let grid = RatingGrid::build(&roster, &selection).unwrap();
        assert_eq!(
            grid.columns,
            vec!["Gardevoir (#1)", "Miraidon (#2)", "Gardevoir (#3)"]
        );
        assert_eq!(grid.rows.len(), 2);
        assert_eq!(grid.rows[0].label, "Kai (Lost Box)");
        assert_eq!(grid.rows[0].ratings, vec![2, 3, 2]);
        assert_eq!(grid.rows[1].ratings, vec![5, 4, 5]);
    }
}
