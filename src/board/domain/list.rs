//! List record within a board.

use super::{BoardId, ListId};
use serde::{Deserialize, Serialize};

/// A column of cards on a board.
///
/// `position` is a dense, zero-based integer unique within the board;
/// rendering order is ascending position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Unique list identifier.
    pub id: ListId,
    /// The board this list belongs to.
    pub board_id: BoardId,
    /// List title as shown in the column header.
    pub title: String,
    /// Zero-based render position among the board's lists.
    pub position: u32,
}

impl List {
    /// Creates a list record.
    #[must_use]
    pub fn new(board_id: BoardId, title: impl Into<String>, position: u32) -> Self {
        Self {
            id: ListId::new(),
            board_id,
            title: title.into(),
            position,
        }
    }
}
