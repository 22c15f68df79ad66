//! Ranked results: filtering and ordering

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{Score, SCORE_MIN};

/// One scored candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Position of the candidate in the ranked input
    pub index: usize,
    pub candidate: String,
    pub score: Score,
}

impl RankedResult {
    pub(crate) fn new(index: usize, candidate: String, score: Score) -> Self {
        Self {
            index,
            candidate,
            score,
        }
    }

    /// False for non-matches and candidates skipped by a deadline
    pub fn is_match(&self) -> bool {
        self.score != SCORE_MIN
    }
}

/// Drop non-matches and order by score descending, then by input position.
pub(crate) fn filter_and_sort(mut results: Vec<RankedResult>) -> Vec<RankedResult> {
    results.retain(RankedResult::is_match);
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.index.cmp(&b.index))
    });
    results
}
