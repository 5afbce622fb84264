//! Notification port for invitation dispatch.

use crate::invitation::domain::Invitation;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Error returned by notification dispatch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invitee notification failed: {0}")]
pub struct NotifyError(pub String);

/// Fire-and-forget invitee notification contract.
///
/// Dispatch is best-effort: the invitation ledger logs a failed delivery
/// and carries on, so implementations must not be relied on for
/// correctness.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InviteeNotifier: Send + Sync {
    /// Notifies the invitee that an invitation awaits them.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] when delivery fails; the caller treats this
    /// as non-fatal.
    async fn notify(&self, invitation: &Invitation, board_title: &str) -> Result<(), NotifyError>;
}
