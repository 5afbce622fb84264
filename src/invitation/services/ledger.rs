//! Invitation ledger: issuance, resolution, and single-use acceptance.

use crate::board::{
    domain::{Board, BoardId, BoardRole, Collaboration, EmailAddress, User, UserId},
    ports::{BoardRepository, BoardRepositoryError, UserRepository, UserRepositoryError},
};
use crate::invitation::{
    domain::{Invitation, InvitationToken},
    ports::{InvitationRepository, InvitationRepositoryError, InviteeNotifier},
};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for invitation lifecycle operations.
///
/// Lifecycle checks are evaluated in a fixed order, so a malformed request
/// always receives the same first error: for acceptance the order is
/// unknown token, then wrong bearer, then expiry, then replay.
#[derive(Debug, Error)]
pub enum InvitationLedgerError {
    /// The target board does not exist.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),

    /// The inviter is not the board owner.
    #[error("user {user_id} may not issue invitations for board {board_id}")]
    Forbidden {
        /// The rejected inviter.
        user_id: UserId,
        /// The board the invitation targeted.
        board_id: BoardId,
    },

    /// No registered user holds the invited address.
    #[error("no registered user for email {0}")]
    UnknownInvitee(EmailAddress),

    /// The invited address already has access to the board.
    #[error("{email} already collaborates on board {board_id}")]
    AlreadyCollaborator {
        /// The invited address.
        email: EmailAddress,
        /// The board the invitation targeted.
        board_id: BoardId,
    },

    /// No invitation carries the presented token.
    #[error("invitation token not recognised")]
    UnknownToken,

    /// The invitation's redemption window has passed.
    #[error("invitation expired at {0}")]
    Expired(DateTime<Utc>),

    /// The presented token was issued to a different email address.
    #[error("invitation was issued to a different email address")]
    EmailMismatch,

    /// The invitation has already been accepted.
    #[error("invitation has already been accepted")]
    AlreadyAccepted,

    /// Board repository operation failed.
    #[error(transparent)]
    Boards(#[from] BoardRepositoryError),

    /// User repository operation failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),

    /// Invitation repository operation failed.
    #[error(transparent)]
    Invitations(#[from] InvitationRepositoryError),
}

/// Result type for invitation ledger operations.
pub type InvitationLedgerResult<T> = Result<T, InvitationLedgerError>;

/// Invitation lifecycle orchestration service.
#[derive(Clone)]
pub struct InvitationLedger<B, U, I, N, C>
where
    B: BoardRepository,
    U: UserRepository,
    I: InvitationRepository,
    N: InviteeNotifier,
    C: Clock + Send + Sync,
{
    boards: Arc<B>,
    users: Arc<U>,
    invitations: Arc<I>,
    notifier: Arc<N>,
    clock: Arc<C>,
}

impl<B, U, I, N, C> InvitationLedger<B, U, I, N, C>
where
    B: BoardRepository,
    U: UserRepository,
    I: InvitationRepository,
    N: InviteeNotifier,
    C: Clock + Send + Sync,
{
    /// Creates a new invitation ledger.
    #[must_use]
    pub const fn new(
        boards: Arc<B>,
        users: Arc<U>,
        invitations: Arc<I>,
        notifier: Arc<N>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            boards,
            users,
            invitations,
            notifier,
            clock,
        }
    }

    /// Issues a pending invitation for a board.
    ///
    /// Only the board owner may invite. The invited address must belong to
    /// a registered user who does not already have access. Notification
    /// dispatch is best-effort: a delivery failure is logged and swallowed,
    /// never failing the issuance.
    ///
    /// # Errors
    ///
    /// Returns [`InvitationLedgerError::BoardNotFound`],
    /// [`InvitationLedgerError::Forbidden`],
    /// [`InvitationLedgerError::UnknownInvitee`], or
    /// [`InvitationLedgerError::AlreadyCollaborator`] in that check order,
    /// plus repository failures.
    pub async fn issue(
        &self,
        board_id: BoardId,
        inviter_id: UserId,
        email: &EmailAddress,
    ) -> InvitationLedgerResult<Invitation> {
        let board = self.require_board(board_id).await?;
        let collaborations = self.boards.collaborations_for(board_id).await?;

        if BoardRole::classify(inviter_id, &board, &collaborations) != BoardRole::Owner {
            return Err(InvitationLedgerError::Forbidden {
                user_id: inviter_id,
                board_id,
            });
        }

        let invitee = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| InvitationLedgerError::UnknownInvitee(email.clone()))?;
        if BoardRole::classify(invitee.id, &board, &collaborations) != BoardRole::None {
            return Err(InvitationLedgerError::AlreadyCollaborator {
                email: email.clone(),
                board_id,
            });
        }

        let invitation = Invitation::issue(board_id, email.clone(), inviter_id, &*self.clock);
        self.invitations.insert(&invitation).await?;
        debug!(
            "issued invitation {} for board {board_id} to {email}",
            invitation.id()
        );

        if let Err(error) = self.notifier.notify(&invitation, board.title()).await {
            warn!(
                "failed to notify invitee for invitation {}: {error}",
                invitation.id()
            );
        }

        Ok(invitation)
    }

    /// Resolves an invitation by token for inspection.
    ///
    /// # Errors
    ///
    /// Returns [`InvitationLedgerError::UnknownToken`] when no invitation
    /// carries the token, or [`InvitationLedgerError::Expired`] when the
    /// redemption window has passed. Expiry is a read-time check; the
    /// stored status stays pending.
    pub async fn resolve(&self, token: &InvitationToken) -> InvitationLedgerResult<Invitation> {
        let invitation = self
            .invitations
            .find_by_token(token)
            .await?
            .ok_or(InvitationLedgerError::UnknownToken)?;
        if invitation.is_expired(&*self.clock) {
            return Err(InvitationLedgerError::Expired(invitation.expires_at()));
        }
        Ok(invitation)
    }

    /// Accepts an invitation, granting the principal collaborator access.
    ///
    /// Preconditions are checked in order: the token must resolve
    /// ([`InvitationLedgerError::UnknownToken`]), the principal's email
    /// must match the invitation's
    /// ([`InvitationLedgerError::EmailMismatch`]), the window must be open
    /// ([`InvitationLedgerError::Expired`]), and the invitation must still
    /// be pending ([`InvitationLedgerError::AlreadyAccepted`]).
    ///
    /// The status flip is an atomic compare-and-swap: of two concurrent
    /// acceptances exactly one succeeds. A collaboration row that already
    /// exists is absorbed; no duplicate row is written.
    ///
    /// # Errors
    ///
    /// The precondition errors above, plus repository failures.
    pub async fn accept(
        &self,
        token: &InvitationToken,
        principal: &User,
    ) -> InvitationLedgerResult<Board> {
        let invitation = self
            .invitations
            .find_by_token(token)
            .await?
            .ok_or(InvitationLedgerError::UnknownToken)?;

        if invitation.email() != &principal.email {
            return Err(InvitationLedgerError::EmailMismatch);
        }
        if invitation.is_expired(&*self.clock) {
            return Err(InvitationLedgerError::Expired(invitation.expires_at()));
        }

        match self.invitations.mark_accepted(invitation.id()).await {
            Ok(_) => {}
            Err(InvitationRepositoryError::AlreadyAccepted(_)) => {
                return Err(InvitationLedgerError::AlreadyAccepted);
            }
            Err(other) => return Err(other.into()),
        }

        let collaboration = Collaboration::new(principal.id, invitation.board_id());
        match self.boards.add_collaboration(collaboration).await {
            Ok(()) | Err(BoardRepositoryError::DuplicateCollaboration { .. }) => {}
            Err(other) => return Err(other.into()),
        }
        debug!(
            "invitation {} accepted by user {}",
            invitation.id(),
            principal.id
        );

        self.require_board(invitation.board_id()).await
    }

    /// Returns a board's invitations, newest first.
    ///
    /// Owner-only, like issuance.
    ///
    /// # Errors
    ///
    /// Returns [`InvitationLedgerError::BoardNotFound`] or
    /// [`InvitationLedgerError::Forbidden`], plus repository failures.
    pub async fn list_for_board(
        &self,
        board_id: BoardId,
        principal: UserId,
    ) -> InvitationLedgerResult<Vec<Invitation>> {
        let board = self.require_board(board_id).await?;
        let collaborations = self.boards.collaborations_for(board_id).await?;
        if BoardRole::classify(principal, &board, &collaborations) != BoardRole::Owner {
            return Err(InvitationLedgerError::Forbidden {
                user_id: principal,
                board_id,
            });
        }
        Ok(self.invitations.list_for_board(board_id).await?)
    }

    async fn require_board(&self, board_id: BoardId) -> InvitationLedgerResult<Board> {
        self.boards
            .find_board(board_id)
            .await?
            .ok_or(InvitationLedgerError::BoardNotFound(board_id))
    }
}
