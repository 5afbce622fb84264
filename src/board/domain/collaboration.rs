//! Collaboration membership fact.

use super::{BoardId, UserId};
use serde::{Deserialize, Serialize};

/// Join fact granting a user collaborator access to a board.
///
/// Unique per `(user_id, board_id)` pair; the repository port enforces that
/// no duplicate row exists for the same pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Collaboration {
    /// The collaborating user.
    pub user_id: UserId,
    /// The board collaborated on.
    pub board_id: BoardId,
}

impl Collaboration {
    /// Creates a collaboration fact.
    #[must_use]
    pub const fn new(user_id: UserId, board_id: BoardId) -> Self {
        Self { user_id, board_id }
    }
}
