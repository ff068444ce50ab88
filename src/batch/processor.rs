//! Batch processor for selection files
//!
//! A selection file holds one event per line, decks separated by commas:
//!
//! ```text
//! # week 3 qualifiers
//! Gardevoir, Charizard, Charizard, Miraidon
//! Lugia, Gardevoir, (none), (none)
//! ```
//!
//! Each line is evaluated independently on a worker pool.

use crate::error::BpResult;
use crate::model::Roster;
use crate::report::Report;
use log::{debug, error, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Slot values that mean "no deck in this slot"
pub const PLACEHOLDERS: &[&str] = &["(none)", "-", "(无)"];

/// Statistics from batch processing
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    pub selections_processed: usize,
    pub recommendations: usize,
    pub errors: usize,
}

/// One event to evaluate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// 1-based line in the source file
    pub line: usize,
    pub decks: Vec<String>,
}

/// Result for a single selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub line: usize,
    pub selection: Vec<String>,
    pub report: Option<Report>,
    pub error: Option<String>,
}

/// Trim slot names and drop empty or placeholder slots
pub fn clean_selection<I, S>(decks: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    decks
        .into_iter()
        .filter_map(|deck| {
            let deck = deck.as_ref().trim();
            if deck.is_empty() || PLACEHOLDERS.contains(&deck) {
                None
            } else {
                Some(deck.to_string())
            }
        })
        .collect()
}

/// Parse one selection line; blank lines and `#` comments yield `None`
pub fn parse_selection_line(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(clean_selection(trimmed.split(',')))
}

/// Read every selection in a file, in file order
pub fn read_selection_file(path: &Path) -> BpResult<Vec<Selection>> {
    info!("Reading selections: {:?}", path);
    let reader = BufReader::new(File::open(path)?);

    let mut selections = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(decks) = parse_selection_line(&line) {
            selections.push(Selection {
                line: idx + 1,
                decks,
            });
        }
    }

    info!("Found {} selections", selections.len());
    Ok(selections)
}

/// Evaluate every selection against `roster`
///
/// `threads` sizes the worker pool; 0 lets rayon choose. Entries come back
/// in input order. A selection that fails (malformed roster data for one of
/// its decks) is recorded in its entry and counted, and the rest continue.
pub fn process_selections(
    roster: &Roster,
    selections: &[Selection],
    threads: usize,
) -> BpResult<(Vec<BatchEntry>, BatchStats)> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;
    debug!("Batch pool: {} threads", pool.current_num_threads());

    let entries: Vec<BatchEntry> = pool.install(|| {
        selections
            .par_iter()
            .map(|selection| evaluate(roster, selection))
            .collect()
    });

    let mut stats = BatchStats {
        selections_processed: entries.len(),
        ..BatchStats::default()
    };
    for entry in &entries {
        match (&entry.report, &entry.error) {
            (Some(report), _) if report.recommendation.pick.is_some() => {
                stats.recommendations += 1
            }
            (_, Some(message)) => {
                stats.errors += 1;
                error!("Line {}: {}", entry.line, message);
            }
            _ => {}
        }
    }

    Ok((entries, stats))
}

fn evaluate(roster: &Roster, selection: &Selection) -> BatchEntry {
    let (report, error) = match Report::build(roster, &selection.decks) {
        Ok(report) => (Some(report), None),
        Err(e) => (None, Some(e.to_string())),
    };

    BatchEntry {
        line: selection.line,
        selection: selection.decks.clone(),
        report,
        error,
    }
}

/// Text rendering of a whole batch
pub fn render_batch(entries: &[BatchEntry], color: bool) -> String {
    let mut out = String::new();

    for (idx, entry) in entries.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "== Line {}: {} ==",
            entry.line,
            entry.selection.join(", ")
        );
        match (&entry.report, &entry.error) {
            (Some(report), _) => out.push_str(&report.render(color)),
            (None, Some(message)) => {
                let _ = writeln!(out, "Error: {}", message);
            }
            (None, None) => {}
        }
    }

    out
}
