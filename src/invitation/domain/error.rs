//! Error types for invitation domain parsing.

use thiserror::Error;

/// Error returned while parsing invitation statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown invitation status: {0}")]
pub struct ParseInvitationStatusError(pub String);
