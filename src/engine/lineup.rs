//! Lineup enumeration

use itertools::Itertools;

/// Number of players fielded against the remaining opponents.
pub const LINEUP_SIZE: usize = 4;

/// Every `size`-player lineup of a roster of `roster_size`, as roster indices.
///
/// Lineups are produced lazily in lexicographic index order:
/// `[0, 1, 2, 3]`, `[0, 1, 2, 4]`, ... A roster smaller than `size`
/// yields nothing.
pub fn lineups(roster_size: usize, size: usize) -> impl Iterator<Item = Vec<usize>> {
    (0..roster_size).combinations(size)
}

/// First lineup with the lowest combined total, and that total.
///
/// `totals[i]` is player `i`'s score against the remaining opponents.
pub(crate) fn best_lineup(totals: &[u32], size: usize) -> Option<(Vec<usize>, u32)> {
    let mut best: Option<(Vec<usize>, u32)> = None;

    for lineup in lineups(totals.len(), size) {
        let score: u32 = lineup.iter().map(|&i| totals[i]).sum();
        if best.as_ref().map_or(true, |(_, best_score)| score < *best_score) {
            best = Some((lineup, score));
        }
    }

    best
}
