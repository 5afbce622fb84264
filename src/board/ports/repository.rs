//! Repository port for board, membership, list, and card state.

use crate::board::domain::{Board, BoardId, Card, Collaboration, List, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board persistence contract.
///
/// The external store is treated as synchronous and fail-fast; no call
/// blocks indefinitely.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Stores a new board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateBoard`] when the board ID
    /// already exists.
    async fn insert_board(&self, board: &Board) -> BoardRepositoryResult<()>;

    /// Finds a board by identifier.
    ///
    /// Returns `None` when the board does not exist.
    async fn find_board(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>>;

    /// Returns the collaboration rows for a board.
    async fn collaborations_for(&self, board_id: BoardId)
    -> BoardRepositoryResult<Vec<Collaboration>>;

    /// Inserts a collaboration row with unique-constraint semantics.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateCollaboration`] when a row
    /// for the same `(user, board)` pair already exists; a second row is
    /// never written.
    async fn add_collaboration(&self, collaboration: Collaboration) -> BoardRepositoryResult<()>;

    /// Stores a new list on a board.
    async fn insert_list(&self, list: &List) -> BoardRepositoryResult<()>;

    /// Returns a board's lists in ascending `position` order.
    async fn lists_for_board(&self, board_id: BoardId) -> BoardRepositoryResult<Vec<List>>;

    /// Stores a new card on a list.
    async fn insert_card(&self, card: &Card) -> BoardRepositoryResult<()>;

    /// Returns every card on a board, grouped by list in ascending list
    /// `position` order and ordered by card `position` within each list.
    async fn cards_for_board(&self, board_id: BoardId) -> BoardRepositoryResult<Vec<Card>>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// A board with the same identifier already exists.
    #[error("duplicate board identifier: {0}")]
    DuplicateBoard(BoardId),

    /// A collaboration row for the pair already exists.
    #[error("user {user_id} already collaborates on board {board_id}")]
    DuplicateCollaboration {
        /// The already-collaborating user.
        user_id: UserId,
        /// The board in question.
        board_id: BoardId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
