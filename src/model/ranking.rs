//! Descending score ranking with stable tie-break.
//!
//! Tie policy, fixed and relied on by insertion:
//! - equal scores keep the relative order they had in the input
//! - an inserted score is treated as appended last, so it ranks after every
//!   pre-existing entry with the same score
//!
//! Non-finite scores compare as equal, which keeps the sort total and
//! panic-free.

use crate::domain::{Placement, RankingEntry};

/// Rank scores in descending order with 1-based positions.
pub fn rank(scores: &[f64]) -> Vec<RankingEntry> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    order
        .into_iter()
        .enumerate()
        .map(|(pos, row)| RankingEntry {
            row,
            score: scores[row],
            position: pos + 1,
        })
        .collect()
}

/// Rank `new_score` against `existing` as if appended last.
///
/// Returns the appended element's 1-based position and the combined count.
pub fn insert_and_rank(existing: &[f64], new_score: f64) -> Placement {
    let mut combined = Vec::with_capacity(existing.len() + 1);
    combined.extend_from_slice(existing);
    combined.push(new_score);

    let appended = existing.len();
    let total = combined.len();
    let position = rank(&combined)
        .into_iter()
        .find(|e| e.row == appended)
        .map(|e| e.position)
        .unwrap_or(total);

    Placement { position, total }
}
