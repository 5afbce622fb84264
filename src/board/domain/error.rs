//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The email address is malformed.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The board title is empty after trimming.
    #[error("board title must not be empty")]
    EmptyBoardTitle,
}

/// Error returned while parsing card priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown card priority: {0}")]
pub struct ParseCardPriorityError(pub String);
