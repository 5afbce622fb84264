//! Access-guard service evaluated at every board entry point.

use crate::board::{
    domain::{Board, BoardId, BoardRole, UserId},
    ports::{BoardRepository, BoardRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by access-guard checks.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The board does not exist.
    #[error("board not found: {0}")]
    NotFound(BoardId),

    /// The principal has no access, or not enough access, to the board.
    #[error("user {user_id} may not perform this operation on board {board_id}")]
    Forbidden {
        /// The rejected principal.
        user_id: UserId,
        /// The board the operation targeted.
        board_id: BoardId,
    },

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
}

/// Result type for access-guard operations.
pub type AccessResult<T> = Result<T, AccessError>;

/// Resolves a board and classifies the caller against it.
///
/// Every invitation and recommendation entry point calls through this guard
/// before doing any work. Classification itself is the pure
/// [`BoardRole::classify`]; this service supplies the board and membership
/// reads it needs.
#[derive(Clone)]
pub struct BoardAccessService<R>
where
    R: BoardRepository,
{
    repository: Arc<R>,
}

impl<R> BoardAccessService<R>
where
    R: BoardRepository,
{
    /// Creates a new access-guard service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the principal's role on the board.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NotFound`] when the board does not exist, or
    /// [`AccessError::Repository`] when a read fails.
    pub async fn role(&self, principal: UserId, board_id: BoardId) -> AccessResult<BoardRole> {
        let board = self
            .repository
            .find_board(board_id)
            .await?
            .ok_or(AccessError::NotFound(board_id))?;
        self.classify(principal, &board).await
    }

    /// Requires the principal to be the owner or a collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Forbidden`] when the principal has no access,
    /// plus the errors of [`Self::role`].
    pub async fn authorize_member(
        &self,
        principal: UserId,
        board_id: BoardId,
    ) -> AccessResult<BoardRole> {
        let role = self.role(principal, board_id).await?;
        if !role.can_view() {
            return Err(AccessError::Forbidden {
                user_id: principal,
                board_id,
            });
        }
        Ok(role)
    }

    /// Requires the principal to be the board owner.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Forbidden`] for collaborators and outsiders,
    /// plus the errors of [`Self::role`].
    pub async fn authorize_owner(&self, principal: UserId, board_id: BoardId) -> AccessResult<()> {
        let role = self.role(principal, board_id).await?;
        if !role.can_invite() {
            return Err(AccessError::Forbidden {
                user_id: principal,
                board_id,
            });
        }
        Ok(())
    }

    async fn classify(&self, principal: UserId, board: &Board) -> AccessResult<BoardRole> {
        let collaborations = self.repository.collaborations_for(board.id()).await?;
        Ok(BoardRole::classify(principal, board, &collaborations))
    }
}
