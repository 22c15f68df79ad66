//! Scratch matrices for the alignment recurrence

use super::{Score, SCORE_MIN};

/// Row-major `rows x cols` grid of scores.
#[derive(Debug, Default)]
pub(super) struct ScoreMatrix {
    data: Vec<Score>,
    cols: usize,
}

impl ScoreMatrix {
    pub(super) fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![SCORE_MIN; rows * cols],
            cols,
        }
    }

    #[inline(always)]
    pub(super) fn get(&self, row: usize, col: usize) -> Score {
        self.data[row * self.cols + col]
    }

    #[inline(always)]
    pub(super) fn set(&mut self, row: usize, col: usize, score: Score) {
        self.data[row * self.cols + col] = score;
    }
}

/// The `D` (match required at column) and `M` (best so far) matrices for one
/// (query, candidate) pair. Dropped once the pair's score is read out.
#[derive(Debug)]
pub(super) struct ScoreMatrices {
    pub(super) d: ScoreMatrix,
    pub(super) m: ScoreMatrix,
}

impl ScoreMatrices {
    pub(super) fn new(rows: usize, cols: usize) -> Self {
        Self {
            d: ScoreMatrix::new(rows, cols),
            m: ScoreMatrix::new(rows, cols),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_min() {
        let mx = ScoreMatrices::new(2, 3);
        assert_eq!(mx.d.get(1, 2), SCORE_MIN);
        assert_eq!(mx.m.get(0, 0), SCORE_MIN);
    }

    #[test]
    fn test_set_get_row_major() {
        let mut mx = ScoreMatrix::new(2, 3);
        mx.set(1, 0, 4.0);
        mx.set(0, 2, 1.5);
        assert_eq!(mx.get(1, 0), 4.0);
        assert_eq!(mx.get(0, 2), 1.5);
        assert_eq!(mx.get(0, 1), SCORE_MIN);
    }
}
