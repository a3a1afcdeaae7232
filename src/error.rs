//! Error types for set cover solving, verification, and instance loading.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the solver, verifier, and loaders.
#[derive(Debug, Error)]
pub enum Error {
    /// The instance itself is malformed: non-positive universe size, or a
    /// subset referencing an element outside `[0, universe_size)`.
    /// Detected before the greedy loop starts.
    #[error("Invalid instance: {0}")]
    InvalidInstance(String),

    /// No combination of subsets can cover the universe. Detected mid-loop
    /// when the best remaining marginal gain is 0 while elements are still
    /// uncovered.
    #[error("Unsolvable instance: {0}")]
    Unsolvable(String),

    /// An input file could not be decoded as a set cover instance or an
    /// optima table.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An underlying I/O failure while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::InvalidInstance`] from any displayable message.
    pub fn invalid_instance(msg: impl Into<String>) -> Self {
        Error::InvalidInstance(msg.into())
    }

    /// Creates an [`Error::Unsolvable`] from any displayable message.
    pub fn unsolvable(msg: impl Into<String>) -> Self {
        Error::Unsolvable(msg.into())
    }

    /// Creates an [`Error::Parse`] from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }
}
