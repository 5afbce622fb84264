//! Repository port for invitation persistence and atomic acceptance.

use crate::board::domain::BoardId;
use crate::invitation::domain::{Invitation, InvitationId, InvitationToken};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for invitation repository operations.
pub type InvitationRepositoryResult<T> = Result<T, InvitationRepositoryError>;

/// Invitation persistence contract.
#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Stores a new invitation.
    ///
    /// # Errors
    ///
    /// Returns [`InvitationRepositoryError::DuplicateInvitation`] when the
    /// invitation ID already exists, or
    /// [`InvitationRepositoryError::DuplicateToken`] when the token value
    /// collides with an existing invitation. A colliding insert is rejected,
    /// never overwritten.
    async fn insert(&self, invitation: &Invitation) -> InvitationRepositoryResult<()>;

    /// Finds an invitation by token.
    ///
    /// Returns `None` when no invitation carries the token.
    async fn find_by_token(
        &self,
        token: &InvitationToken,
    ) -> InvitationRepositoryResult<Option<Invitation>>;

    /// Returns a board's invitations, newest first.
    async fn list_for_board(&self, board_id: BoardId)
    -> InvitationRepositoryResult<Vec<Invitation>>;

    /// Atomically transitions a pending invitation to accepted.
    ///
    /// Compare-and-swap semantics: of two concurrent callers exactly one
    /// succeeds; the other observes
    /// [`InvitationRepositoryError::AlreadyAccepted`].
    ///
    /// # Errors
    ///
    /// Returns [`InvitationRepositoryError::NotFound`] when the invitation
    /// does not exist, or [`InvitationRepositoryError::AlreadyAccepted`]
    /// when the stored status is no longer pending.
    async fn mark_accepted(&self, id: InvitationId) -> InvitationRepositoryResult<Invitation>;
}

/// Errors returned by invitation repository implementations.
#[derive(Debug, Clone, Error)]
pub enum InvitationRepositoryError {
    /// An invitation with the same identifier already exists.
    #[error("duplicate invitation identifier: {0}")]
    DuplicateInvitation(InvitationId),

    /// The token value collides with an existing invitation.
    #[error("invitation token collision")]
    DuplicateToken,

    /// The invitation was not found.
    #[error("invitation not found: {0}")]
    NotFound(InvitationId),

    /// The invitation has already been accepted.
    #[error("invitation already accepted: {0}")]
    AlreadyAccepted(InvitationId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl InvitationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
