//! Ban, pick and risk computation

use super::lineup::{best_lineup, LINEUP_SIZE};
use crate::error::BpResult;
use crate::model::Roster;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

/// Deck to veto and how much it threatens the whole roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanChoice {
    pub target: String,
    /// Sum of every player's rating against `target`
    pub threat_score: u32,
}

/// Lineup to field against the remaining opponents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickChoice {
    /// Player names in roster order
    pub players: Vec<String>,
    pub score: u32,
}

/// The picked player whose loss hurts the lineup most
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub if_removed: String,
    /// Score of the three players left behind
    pub remaining_score: u32,
}

/// Full answer for one opponent selection
///
/// `None` fields mean the input did not support that part of the answer
/// (no opponents, too few players, nothing left after the ban). They are
/// not zero scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub ban: Option<BanChoice>,
    pub remaining_opponents: Vec<String>,
    pub pick: Option<PickChoice>,
    pub risk: Option<RiskAssessment>,
}

/// Recommend a ban, a lineup and its worst-case removal.
///
/// `selected` is a multiset: a deck listed twice occupies two slots. Ties
/// resolve to the first candidate in a fixed order:
///
/// * ban: distinct decks by first occurrence in `selected`
/// * pick: lineups in lexicographic roster-index order
/// * risk: picked players in roster order
///
/// Fails only when a player's table cannot rate a deck (no `"Other"`).
pub fn recommend(roster: &Roster, selected: &[String]) -> BpResult<Recommendation> {
    let ban = select_ban(roster, selected)?;
    let remaining_opponents = remove_banned(selected, ban.as_ref());

    let mut recommendation = Recommendation {
        ban,
        remaining_opponents,
        pick: None,
        risk: None,
    };

    if recommendation.remaining_opponents.is_empty() {
        debug!("No opponents left after ban, skipping pick");
        return Ok(recommendation);
    }

    let totals = roster
        .players()
        .iter()
        .map(|p| p.score_against(&recommendation.remaining_opponents))
        .collect::<BpResult<Vec<u32>>>()?;

    let Some((lineup, score)) = best_lineup(&totals, LINEUP_SIZE) else {
        debug!(
            "Roster has {} players, need {} for a pick",
            roster.len(),
            LINEUP_SIZE
        );
        return Ok(recommendation);
    };

    let players = roster.players();
    recommendation.risk = worst_removal(&lineup, &totals).map(|(removed, remaining_score)| {
        RiskAssessment {
            if_removed: players[removed].name.clone(),
            remaining_score,
        }
    });
    recommendation.pick = Some(PickChoice {
        players: lineup.iter().map(|&i| players[i].name.clone()).collect(),
        score,
    });

    debug!("Pick: {:?}", recommendation.pick);
    debug!("Risk: {:?}", recommendation.risk);

    Ok(recommendation)
}

/// Distinct selected deck with the highest roster-wide threat score
fn select_ban(roster: &Roster, selected: &[String]) -> BpResult<Option<BanChoice>> {
    let mut best: Option<BanChoice> = None;

    for deck in selected.iter().unique() {
        let mut threat_score = 0u32;
        for player in roster.players() {
            threat_score += u32::from(player.rating(deck)?);
        }
        debug!("Threat score for {}: {}", deck, threat_score);

        if best.as_ref().map_or(true, |b| threat_score > b.threat_score) {
            best = Some(BanChoice {
                target: deck.clone(),
                threat_score,
            });
        }
    }

    Ok(best)
}

/// Selection with one slot of the banned deck removed
fn remove_banned(selected: &[String], ban: Option<&BanChoice>) -> Vec<String> {
    let mut remaining = selected.to_vec();
    if let Some(ban) = ban {
        if let Some(pos) = remaining.iter().position(|d| *d == ban.target) {
            remaining.remove(pos);
        }
    }
    remaining
}

/// Lineup member whose removal leaves the highest three-player score
fn worst_removal(lineup: &[usize], totals: &[u32]) -> Option<(usize, u32)> {
    let mut worst: Option<(usize, u32)> = None;

    for &removed in lineup {
        let score: u32 = lineup
            .iter()
            .filter(|&&i| i != removed)
            .map(|&i| totals[i])
            .sum();
        if worst.map_or(true, |(_, worst_score)| score > worst_score) {
            worst = Some((removed, score));
        }
    }

    worst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::lineups;
    use crate::error::BpError;
    use crate::model::Player;
    use std::collections::BTreeMap;

    fn player(name: &str, entries: &[(&str, u8)]) -> Player {
        let ratings: BTreeMap<String, u8> = entries
            .iter()
            .map(|(deck, r)| (deck.to_string(), *r))
            .collect();
        Player::new(name, "Deck", ratings)
    }

    fn decks(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn uniform_roster(count: usize) -> Roster {
        let players = (0..count)
            .map(|i| player(&format!("P{}", i), &[("A", 1), ("B", 6), ("Other", 3)]))
            .collect();
        Roster::new(players).unwrap()
    }

    /// Six players with distinct strengths, so the optimum is unique
    fn mixed_roster() -> Roster {
        Roster::new(vec![
            player("Ann", &[("Gardevoir", 2), ("Charizard", 5), ("Other", 3)]),
            player("Bo", &[("Gardevoir", 4), ("Charizard", 1), ("Other", 4)]),
            player("Cy", &[("Gardevoir", 6), ("Charizard", 6), ("Other", 2)]),
            player("Di", &[("Gardevoir", 1), ("Charizard", 3), ("Other", 5)]),
            player("Ed", &[("Gardevoir", 3), ("Charizard", 2), ("Other", 1)]),
            player("Flo", &[("Gardevoir", 5), ("Charizard", 4), ("Other", 6)]),
        ])
        .unwrap()
    }

    fn lineup_score(roster: &Roster, lineup: &[usize], opponents: &[String]) -> u32 {
        lineup
            .iter()
            .map(|&i| roster.players()[i].score_against(opponents).unwrap())
            .sum()
    }

    #[test]
    fn test_uniform_roster_scenario() {
        let roster = uniform_roster(5);
        let rec = recommend(&roster, &decks(&["A", "B", "B"])).unwrap();

        assert_eq!(
            rec.ban,
            Some(BanChoice {
                target: "B".to_string(),
                threat_score: 30
            })
        );
        assert_eq!(rec.remaining_opponents, decks(&["A", "B"]));

        let pick = rec.pick.unwrap();
        assert_eq!(pick.players, vec!["P0", "P1", "P2", "P3"]);
        assert_eq!(pick.score, 28);

        let risk = rec.risk.unwrap();
        assert_eq!(risk.if_removed, "P0");
        assert_eq!(risk.remaining_score, 21);
    }

    #[test]
    fn test_small_roster_bans_but_does_not_pick() {
        let roster = uniform_roster(3);
        let rec = recommend(&roster, &decks(&["A", "B"])).unwrap();
        assert_eq!(rec.ban.map(|b| b.target), Some("B".to_string()));
        assert_eq!(rec.remaining_opponents, decks(&["A"]));
        assert!(rec.pick.is_none());
        assert!(rec.risk.is_none());
    }

    #[test]
    fn test_empty_selection() {
        let roster = uniform_roster(5);
        let rec = recommend(&roster, &[]).unwrap();
        assert!(rec.ban.is_none());
        assert!(rec.remaining_opponents.is_empty());
        assert!(rec.pick.is_none());
        assert!(rec.risk.is_none());
    }

    #[test]
    fn test_unlisted_deck_scores_fallback() {
        let roster = mixed_roster();
        let x = recommend(&roster, &decks(&["X"])).unwrap();
        let y = recommend(&roster, &decks(&["Lugia"])).unwrap();

        let fallback_sum: u32 = roster
            .players()
            .iter()
            .map(|p| u32::from(p.fallback().unwrap()))
            .sum();
        assert_eq!(x.ban.as_ref().unwrap().threat_score, fallback_sum);
        assert_eq!(
            x.ban.as_ref().unwrap().threat_score,
            y.ban.as_ref().unwrap().threat_score
        );
        assert_eq!(x.pick, y.pick);
    }

    #[test]
    fn test_ban_of_only_opponent_skips_pick() {
        let roster = uniform_roster(6);
        let rec = recommend(&roster, &decks(&["A"])).unwrap();
        assert_eq!(rec.ban.unwrap().threat_score, 6);
        assert!(rec.remaining_opponents.is_empty());
        assert!(rec.pick.is_none());
        assert!(rec.risk.is_none());
    }

    #[test]
    fn test_duplicate_ban_removes_one_slot() {
        let roster = uniform_roster(4);
        let rec = recommend(&roster, &decks(&["B", "A", "B"])).unwrap();
        assert_eq!(rec.ban.unwrap().target, "B");
        assert_eq!(rec.remaining_opponents, decks(&["A", "B"]));
    }

    #[test]
    fn test_ban_ties_keep_first_occurrence() {
        let roster = uniform_roster(4);
        // Both unlisted, both rate 3 for everyone
        let rec = recommend(&roster, &decks(&["Y", "X", "Y"])).unwrap();
        let ban = rec.ban.unwrap();
        assert_eq!(ban.target, "Y");
        assert_eq!(ban.threat_score, 12);
        assert_eq!(rec.remaining_opponents, decks(&["X", "Y"]));
    }

    #[test]
    fn test_ban_is_maximal() {
        let roster = mixed_roster();
        let selection = decks(&["Gardevoir", "Charizard", "Lugia"]);
        let rec = recommend(&roster, &selection).unwrap();
        let ban = rec.ban.unwrap();

        for deck in &selection {
            let threat: u32 = roster
                .players()
                .iter()
                .map(|p| u32::from(p.rating(deck).unwrap()))
                .sum();
            assert!(threat <= ban.threat_score);
            if *deck == ban.target {
                assert_eq!(threat, ban.threat_score);
            }
        }
        // Gardevoir 21, Charizard 21, Other 21: all tie, first wins
        assert_eq!(ban.target, "Gardevoir");
    }

    #[test]
    fn test_pick_is_optimal_and_risk_is_maximal() {
        let roster = mixed_roster();
        let selection = decks(&["Gardevoir", "Charizard", "Charizard", "Lugia"]);
        let rec = recommend(&roster, &selection).unwrap();
        let remaining = rec.remaining_opponents.clone();
        let pick = rec.pick.unwrap();
        let risk = rec.risk.unwrap();

        for lineup in lineups(roster.len(), LINEUP_SIZE) {
            assert!(lineup_score(&roster, &lineup, &remaining) >= pick.score);
        }

        let picked: Vec<usize> = pick
            .players
            .iter()
            .map(|name| {
                roster
                    .players()
                    .iter()
                    .position(|p| &p.name == name)
                    .unwrap()
            })
            .collect();
        assert_eq!(lineup_score(&roster, &picked, &remaining), pick.score);

        for &removed in &picked {
            let rest: Vec<usize> = picked.iter().copied().filter(|&i| i != removed).collect();
            assert!(lineup_score(&roster, &rest, &remaining) <= risk.remaining_score);
        }
        assert!(pick.players.contains(&risk.if_removed));
    }

    #[test]
    fn test_mixed_roster_exact_answer() {
        let roster = mixed_roster();
        let rec = recommend(&roster, &decks(&["Gardevoir", "Charizard", "Charizard"])).unwrap();

        // Gardevoir 21 vs Charizard 21: tie, Gardevoir comes first
        assert_eq!(rec.ban.as_ref().unwrap().target, "Gardevoir");
        assert_eq!(rec.remaining_opponents, decks(&["Charizard", "Charizard"]));

        // Per-player totals: Ann 10, Bo 2, Cy 12, Di 6, Ed 4, Flo 8
        let pick = rec.pick.unwrap();
        assert_eq!(pick.players, vec!["Bo", "Di", "Ed", "Flo"]);
        assert_eq!(pick.score, 20);

        // Losing Bo leaves the worst trio
        let risk = rec.risk.unwrap();
        assert_eq!(risk.if_removed, "Bo");
        assert_eq!(risk.remaining_score, 18);
    }

    #[test]
    fn test_deterministic() {
        let roster = mixed_roster();
        let selection = decks(&["Charizard", "Lugia", "Gardevoir", "Lugia"]);
        let first = recommend(&roster, &selection).unwrap();
        for _ in 0..5 {
            assert_eq!(recommend(&roster, &selection).unwrap(), first);
        }
    }

    #[test]
    fn test_missing_fallback_propagates() {
        let roster = Roster::new(vec![
            player("Ann", &[("A", 1), ("Other", 3)]),
            player("Bo", &[("A", 2)]),
        ])
        .unwrap();

        assert!(recommend(&roster, &decks(&["A"])).is_ok());
        match recommend(&roster, &decks(&["A", "Z"])) {
            Err(BpError::MissingFallback { player, deck }) => {
                assert_eq!(player, "Bo");
                assert_eq!(deck, "Z");
            }
            other => panic!("expected MissingFallback, got {:?}", other),
        }
    }
}
