//! Error types for the MySQL executor.

use layers_core::LayerError;
use thiserror::Error;

/// Errors raised while compiling or running a statement.
#[derive(Debug, Error)]
pub enum Error {
    /// The statement was rejected before it was sent.
    #[error("invalid statement: {0}")]
    Layer(#[from] LayerError),

    /// The database reported a failure. Never retried.
    #[error("database error: {0}")]
    Execution(#[from] sqlx::Error),

    /// Connection settings are missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for executor operations.
pub type Result<T> = std::result::Result<T, Error>;
