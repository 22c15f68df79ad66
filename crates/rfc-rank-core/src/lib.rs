//! rfc-rank Core Engine
//!
//! Fuzzy ranking for the local RFC index: given a typed query fragment and a
//! list of candidate lines (`rfc2616::Hypertext Transfer Protocol -- HTTP-1.1`),
//! score every candidate, drop the ones that do not match and return the rest
//! best first.
//!
//! Ranking never fails. Empty, oversized or non-matching candidates are left
//! out of the result silently.
//!
//! # Example
//!
//! ```rust
//! use rfc_rank_core::{EngineConfig, Ranker};
//!
//! let ranker = Ranker::new(EngineConfig::default()).unwrap();
//! let ranked = ranker.rank("tcp", &[
//!     "rfc793::Transmission Control Protocol",
//!     "rfc9293::Transmission Control Protocol (TCP)",
//!     "rfc768::User Datagram Protocol",
//! ]);
//! assert_eq!(ranked[0], "rfc9293::Transmission Control Protocol (TCP)");
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;

// Re-export main types at crate root
pub use config::{EngineConfig, ScoringWeights};
pub use error::{EngineError, Result};
pub use fuzzy::{
    compute_bonus, rank, score, RankedResult, Ranker, Score, Scorer, SCORE_MAX, SCORE_MIN,
};
