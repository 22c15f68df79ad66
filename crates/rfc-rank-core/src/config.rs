//! Engine configuration
//!
//! Every tunable of the ranking engine lives in one immutable [`EngineConfig`]
//! value handed to [`Ranker::new`](crate::Ranker::new). Configs can be loaded
//! from JSON; missing fields fall back to the defaults below.
//!
//! ```json
//! {
//!   "weights": { "match_consecutive": 1.5 },
//!   "pool_size": 8,
//!   "deadline_ms": 250
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::fuzzy::Score;

/// Default maximum query/candidate length in characters.
pub const DEFAULT_MAX_MATCH_LEN: usize = 1024;

/// Default number of concurrent scoring workers.
pub const DEFAULT_POOL_SIZE: usize = 20;

/// Gap penalties and match bonuses used by the alignment scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Penalty per candidate character skipped before the first match
    pub gap_leading: Score,
    /// Penalty per skipped character while matching the last query character
    pub gap_trailing: Score,
    /// Penalty per skipped character between matches
    pub gap_inner: Score,
    /// Flat bonus for a match directly after the previous match
    pub match_consecutive: Score,
    /// Bonus for a match right after a path separator
    pub match_slash: Score,
    /// Bonus for a match right after `_`, `-` or space
    pub match_word: Score,
    /// Bonus for an uppercase match right after a lowercase character
    pub match_capital: Score,
    /// Bonus for a match right after `.`
    pub match_dot: Score,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            gap_leading: -0.005,
            gap_trailing: -0.005,
            gap_inner: -0.01,
            match_consecutive: 1.0,
            match_slash: 0.9,
            match_word: 0.8,
            match_capital: 0.7,
            match_dot: 0.6,
        }
    }
}

impl ScoringWeights {
    fn named(&self) -> [(&'static str, Score); 8] {
        [
            ("gap_leading", self.gap_leading),
            ("gap_trailing", self.gap_trailing),
            ("gap_inner", self.gap_inner),
            ("match_consecutive", self.match_consecutive),
            ("match_slash", self.match_slash),
            ("match_word", self.match_word),
            ("match_capital", self.match_capital),
            ("match_dot", self.match_dot),
        ]
    }
}

/// Ranking engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Scoring weights
    pub weights: ScoringWeights,
    /// Queries or candidates longer than this many characters never match
    pub max_match_len: usize,
    /// Number of candidates scored concurrently
    pub pool_size: usize,
    /// Stop admitting candidates after this many milliseconds (unscored ones are excluded)
    pub deadline_ms: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            max_match_len: DEFAULT_MAX_MATCH_LEN,
            pool_size: DEFAULT_POOL_SIZE,
            deadline_ms: None,
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON. Fields left out keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Same config with a different pool size
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Same config with a scoring deadline
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline_ms = Some(deadline.as_millis().min(u64::MAX as u128) as u64);
        self
    }

    /// Deadline as a [`Duration`], if one is configured
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }

    /// Reject configs the engine cannot run with.
    ///
    /// Weights must be finite: the MIN/MAX sentinels are infinities and only
    /// keep their ordering against finite scores.
    pub fn validate(&self) -> Result<()> {
        if self.pool_size == 0 {
            return Err(EngineError::Config("pool_size must be at least 1".to_string()));
        }
        if self.max_match_len == 0 {
            return Err(EngineError::Config(
                "max_match_len must be at least 1".to_string(),
            ));
        }
        for (name, value) in self.weights.named() {
            if !value.is_finite() {
                return Err(EngineError::Config(format!(
                    "weight {} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
