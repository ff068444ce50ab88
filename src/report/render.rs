//! Text and JSON rendering

use super::grid::{RatingBand, RatingGrid};
use crate::engine::{recommend, Recommendation};
use crate::error::BpResult;
use crate::model::Roster;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const RESET: &str = "\x1b[0m";

/// Everything shown for one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub selection: Vec<String>,
    pub table: RatingGrid,
    pub recommendation: Recommendation,
}

impl Report {
    pub fn build(roster: &Roster, selection: &[String]) -> BpResult<Self> {
        Ok(Self {
            selection: selection.to_vec(),
            table: RatingGrid::build(roster, selection)?,
            recommendation: recommend(roster, selection)?,
        })
    }

    pub fn to_json(&self) -> BpResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, color: bool) -> String {
        render_text(&self.table, &self.recommendation, color)
    }
}

/// Rating table followed by the recommendation
pub fn render_text(grid: &RatingGrid, recommendation: &Recommendation, color: bool) -> String {
    let mut out = String::new();

    if grid.columns.is_empty() {
        out.push_str("No opponents selected.\n");
        return out;
    }

    out.push_str("Matchups (lower is better)\n");
    render_grid(&mut out, grid, color);
    out.push('\n');
    out.push_str(&render_recommendation(recommendation));
    out
}

fn render_grid(out: &mut String, grid: &RatingGrid, color: bool) {
    let label_width = grid
        .rows
        .iter()
        .map(|r| display_width(&r.label))
        .chain(std::iter::once(display_width("Player")))
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = grid.columns.iter().map(|c| display_width(c)).collect();

    let _ = write!(out, "{}", pad("Player", label_width));
    for (column, width) in grid.columns.iter().zip(&widths) {
        let _ = write!(out, " | {}", pad(column, *width));
    }
    out.push('\n');

    let _ = write!(out, "{}", "-".repeat(label_width));
    for width in &widths {
        let _ = write!(out, "-+-{}", "-".repeat(*width));
    }
    out.push('\n');

    for row in &grid.rows {
        let _ = write!(out, "{}", pad(&row.label, label_width));
        for (rating, width) in row.ratings.iter().zip(&widths) {
            let cell = format!("{:^width$}", rating, width = *width);
            if color {
                let style = RatingBand::from_rating(*rating).ansi_style();
                let _ = write!(out, " | {}{}{}", style, cell, RESET);
            } else {
                let _ = write!(out, " | {}", cell);
            }
        }
        out.push('\n');
    }

    let legend: Vec<String> = RatingBand::all()
        .iter()
        .enumerate()
        .map(|(idx, band)| format!("{}={}", idx + 1, band.label()))
        .collect();
    let _ = writeln!(out, "Legend: {}", legend.join(", "));
}

/// Ban, pick and risk lines
pub fn render_recommendation(recommendation: &Recommendation) -> String {
    let mut out = String::new();

    match &recommendation.ban {
        Some(ban) => {
            let _ = writeln!(out, "Ban:  {} (threat {})", ban.target, ban.threat_score);
        }
        None => out.push_str("Ban:  no opponents selected\n"),
    }

    match &recommendation.pick {
        Some(pick) => {
            let _ = writeln!(out, "Pick: {} (score {})", pick.players.join(" + "), pick.score);
        }
        None => out.push_str("Pick: not enough players or opponents for a pick\n"),
    }

    if let Some(risk) = &recommendation.risk {
        let _ = writeln!(
            out,
            "Risk: if {} is removed, the remaining three score {}",
            risk.if_removed, risk.remaining_score
        );
    }

    if !recommendation.remaining_opponents.is_empty() {
        let _ = writeln!(
            out,
            "Remaining opponents: {}",
            recommendation.remaining_opponents.join(", ")
        );
    }

    out
}

/// Roster listing and the pool of opponent decks it rates
pub fn render_roster(roster: &Roster) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Players ({}):", roster.len());
    for player in roster.players() {
        let _ = writeln!(out, "  - {} ({})", player.name, player.deck);
    }

    let pool = roster.known_opponents();
    let _ = writeln!(out, "Opponent decks ({}):", pool.len());
    for deck in &pool {
        let _ = writeln!(out, "  - {}", deck);
    }
    out
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}
