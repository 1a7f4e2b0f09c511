//! Error types for roster handling.

use thiserror::Error;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while parsing or validating a roster.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The roster JSON could not be parsed.
    #[error("invalid roster JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The roster contains no pets at all.
    #[error("roster is empty")]
    EmptyRoster,
}
