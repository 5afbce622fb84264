//! Access classification for board operations.

use super::{Board, Collaboration, UserId};
use serde::{Deserialize, Serialize};

/// Relationship between a principal and a board.
///
/// Every read or mutation of a board, its lists, its cards, or its
/// invitations classifies the caller first and rejects unless the result
/// grants enough access. Exactly one variant holds for any `(user, board)`
/// pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardRole {
    /// The single user who created the board; full control, including
    /// deletion and invitation issuance.
    Owner,
    /// A user granted access through an accepted invitation; may read and
    /// modify lists and cards but not delete the board or invite others.
    Collaborator,
    /// No access.
    None,
}

impl BoardRole {
    /// Classifies a principal against a board and its membership set.
    ///
    /// Pure and deterministic: `Owner` iff the board's owner is the
    /// principal, otherwise `Collaborator` iff a collaboration row exists
    /// for the pair, otherwise `None`. Safe to call repeatedly within one
    /// request.
    #[must_use]
    pub fn classify(principal: UserId, board: &Board, collaborations: &[Collaboration]) -> Self {
        if board.owner_id() == principal {
            return Self::Owner;
        }
        let is_collaborator = collaborations
            .iter()
            .any(|row| row.user_id == principal && row.board_id == board.id());
        if is_collaborator {
            return Self::Collaborator;
        }
        Self::None
    }

    /// Returns `true` when the role permits reading and modifying the
    /// board's lists and cards.
    #[must_use]
    pub const fn can_view(self) -> bool {
        matches!(self, Self::Owner | Self::Collaborator)
    }

    /// Returns `true` when the role permits issuing invitations.
    #[must_use]
    pub const fn can_invite(self) -> bool {
        matches!(self, Self::Owner)
    }
}
