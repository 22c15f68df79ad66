//! Fuzzy Ranking Engine
//!
//! Subsequence alignment scoring in the style of interactive fuzzy finders:
//!
//! 1. **Bonus table** - per-position bonus for word, path, dot and camelCase boundaries
//! 2. **Alignment scorer** - two-matrix DP over (query, candidate)
//! 3. **Ranker** - scores every candidate on a bounded worker pool
//! 4. **Results** - drops non-matches, sorts by descending score then input order
//!
//! Scores are `f64`. [`SCORE_MIN`] (−∞) marks a non-match and [`SCORE_MAX`] (+∞)
//! is returned when query and candidate have the same length.
//!
//! # Example
//!
//! ```rust
//! use rfc_rank_core::fuzzy::{EngineConfig, Ranker};
//!
//! let ranker = Ranker::new(EngineConfig::default()).unwrap();
//! let ranked = ranker.rank("ab", &["xaybz", "ab"]);
//! assert_eq!(ranked, vec!["ab", "xaybz"]);
//! ```

mod bonus;
mod engine;
mod matrix;
mod results;
mod scorer;

pub use crate::config::{EngineConfig, ScoringWeights};
pub use bonus::compute_bonus;
pub use engine::{rank, score, Ranker};
pub use results::RankedResult;
pub use scorer::Scorer;

/// Relevance score of one candidate
pub type Score = f64;

/// Score of a candidate that does not match (or was never scored)
pub const SCORE_MIN: Score = f64::NEG_INFINITY;

/// Score of a same-length candidate
pub const SCORE_MAX: Score = f64::INFINITY;
