//! Error types for rfc-rank-core.
//!
//! Ranking and scoring never fail. Errors only come from building an engine:
//! loading or validating its configuration, or starting its worker pool.

use thiserror::Error;

/// Error type for engine construction and configuration loading.
#[derive(Error, Debug)]
pub enum EngineError {
    /// IO error while reading a config file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed config JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration rejected by validation
    #[error("configuration error: {0}")]
    Config(String),

    /// Worker pool could not be started
    #[error("worker pool error: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type alias using [`EngineError`].
pub type Result<T> = std::result::Result<T, EngineError>;
