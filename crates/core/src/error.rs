//! Error types for bakeoff-core

use thiserror::Error;

/// Core error type
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Missing backend configuration: set {} (e.g. in your .env file)", .missing.join(" and "))]
    Configuration { missing: Vec<&'static str> },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid term code: {0:?}")]
    InvalidTermCode(String),

    #[error("No data directory found")]
    NoDataDir,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CoreError>;
