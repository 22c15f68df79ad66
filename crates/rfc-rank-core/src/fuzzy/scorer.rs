//! Alignment scorer
//!
//! Scores a query against one candidate by aligning the query as a
//! case-insensitive subsequence of the candidate. Two matrices are filled row
//! by row (one row per query character):
//!
//! - `D[i][j]`: best score with query char `i` matched exactly at candidate char `j`
//! - `M[i][j]`: best score for query chars `..=i` using candidate chars `..=j`
//!
//! A match either extends the best earlier alignment plus the positional bonus
//! at `j`, or extends a consecutive run with a flat bonus. Skipped candidate
//! characters cost a gap penalty. The score is `M[n-1][m-1]`.

use super::bonus::bonus_for_chars;
use super::matrix::ScoreMatrices;
use super::{Score, SCORE_MAX, SCORE_MIN};
use crate::config::{EngineConfig, ScoringWeights, DEFAULT_MAX_MATCH_LEN};

/// Simple per-char lowercase. Keeps one output char per input char so
/// positions line up with the bonus table.
#[inline]
pub(crate) fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Scores (query, candidate) pairs with a fixed set of weights.
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    weights: ScoringWeights,
    max_match_len: usize,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            max_match_len: DEFAULT_MAX_MATCH_LEN,
        }
    }
}

impl Scorer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            weights: config.weights,
            max_match_len: config.max_match_len,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score `candidate` against `query`.
    pub fn score(&self, query: &str, candidate: &str) -> Score {
        let query: Vec<char> = query.chars().map(fold).collect();
        let candidate: Vec<char> = candidate.chars().collect();
        self.score_chars(&query, &candidate)
    }

    /// Score with a pre-folded query, so a ranking pass folds it only once.
    pub(crate) fn score_chars(&self, query_lower: &[char], candidate: &[char]) -> Score {
        let n = query_lower.len();
        let m = candidate.len();

        if n == 0 || m == 0 || n > self.max_match_len || m > self.max_match_len {
            tracing::trace!(n, m, max = self.max_match_len, "unmatchable length");
            return SCORE_MIN;
        }

        // Same length is scored as a perfect match without looking at content.
        if n == m {
            return SCORE_MAX;
        }

        let mut mx = ScoreMatrices::new(n, m);
        self.compute(query_lower, candidate, &mut mx);
        mx.m.get(n - 1, m - 1)
    }

    fn compute(&self, query_lower: &[char], candidate: &[char], mx: &mut ScoreMatrices) {
        let w = &self.weights;
        let bonus = bonus_for_chars(candidate, w);
        let candidate_lower: Vec<char> = candidate.iter().copied().map(fold).collect();

        let n = query_lower.len();

        for (i, &qc) in query_lower.iter().enumerate() {
            let mut prev_score = SCORE_MIN;
            let gap = if i == n - 1 {
                w.gap_trailing
            } else {
                w.gap_inner
            };

            for (j, &cc) in candidate_lower.iter().enumerate() {
                if qc == cc {
                    let score = if i == 0 {
                        (j as Score) * w.gap_leading + bonus[j]
                    } else if j > 0 {
                        let spread = mx.m.get(i - 1, j - 1) + bonus[j];
                        let run = mx.d.get(i - 1, j - 1) + w.match_consecutive;
                        spread.max(run)
                    } else {
                        SCORE_MIN
                    };
                    mx.d.set(i, j, score);
                    prev_score = score.max(prev_score + gap);
                    mx.m.set(i, j, prev_score);
                } else {
                    mx.d.set(i, j, SCORE_MIN);
                    prev_score += gap;
                    mx.m.set(i, j, prev_score);
                }
            }
        }
    }
}
