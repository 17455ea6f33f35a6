//! Error types for the seed finder

use thiserror::Error;

/// Main error type for the engine
#[derive(Debug, Error)]
pub enum Error {
    /// The caller asked for something the finder cannot answer
    /// (no constraints, zero target, zero budget).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A world size cannot hold the mandatory evil slot. Static bug, not recoverable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Save format error: {0}")]
    SaveFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
