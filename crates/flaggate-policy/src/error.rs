//! Error types for the Flaggate policy library.

use thiserror::Error;

/// Result type alias using the policy Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for policy configuration handling.
///
/// Decision evaluation itself is total and never returns an error; only the
/// configuration edges (file loading, parsing) can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
