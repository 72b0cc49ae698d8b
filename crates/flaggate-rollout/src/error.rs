//! Error types for the Flaggate rollout library.

use thiserror::Error;

/// Result type alias using the rollout Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for strategy editing.
///
/// Normalization itself is total and never fails; only name-keyed editor
/// operations can.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No variant with the given name exists in the strategy.
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    /// A variant with the given name already exists in the strategy.
    #[error("Duplicate variant: {0}")]
    DuplicateVariant(String),
}
