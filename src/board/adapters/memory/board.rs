//! In-memory repository for board state.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Board, BoardId, Card, Collaboration, List, ListId},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};

/// Thread-safe in-memory board repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    boards: HashMap<BoardId, Board>,
    collaborations: Vec<Collaboration>,
    lists: Vec<List>,
    cards: Vec<Card>,
}

impl InMemoryBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> BoardRepositoryError {
    BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Positions of a board's lists, keyed by list identifier.
fn list_positions(state: &InMemoryBoardState, board_id: BoardId) -> HashMap<ListId, u32> {
    state
        .lists
        .iter()
        .filter(|list| list.board_id == board_id)
        .map(|list| (list.id, list.position))
        .collect()
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn insert_board(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.boards.contains_key(&board.id()) {
            return Err(BoardRepositoryError::DuplicateBoard(board.id()));
        }
        state.boards.insert(board.id(), board.clone());
        Ok(())
    }

    async fn find_board(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.boards.get(&id).cloned())
    }

    async fn collaborations_for(
        &self,
        board_id: BoardId,
    ) -> BoardRepositoryResult<Vec<Collaboration>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .collaborations
            .iter()
            .filter(|row| row.board_id == board_id)
            .copied()
            .collect())
    }

    async fn add_collaboration(&self, collaboration: Collaboration) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.collaborations.contains(&collaboration) {
            return Err(BoardRepositoryError::DuplicateCollaboration {
                user_id: collaboration.user_id,
                board_id: collaboration.board_id,
            });
        }
        state.collaborations.push(collaboration);
        Ok(())
    }

    async fn insert_list(&self, list: &List) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.lists.push(list.clone());
        Ok(())
    }

    async fn lists_for_board(&self, board_id: BoardId) -> BoardRepositoryResult<Vec<List>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut lists: Vec<List> = state
            .lists
            .iter()
            .filter(|list| list.board_id == board_id)
            .cloned()
            .collect();
        lists.sort_by_key(|list| list.position);
        Ok(lists)
    }

    async fn insert_card(&self, card: &Card) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.cards.push(card.clone());
        Ok(())
    }

    async fn cards_for_board(&self, board_id: BoardId) -> BoardRepositoryResult<Vec<Card>> {
        let state = self.state.read().map_err(lock_error)?;
        let positions = list_positions(&state, board_id);
        let mut cards: Vec<Card> = state
            .cards
            .iter()
            .filter(|card| positions.contains_key(&card.list_id))
            .cloned()
            .collect();
        cards.sort_by_key(|card| {
            let list_position = positions.get(&card.list_id).copied().unwrap_or(u32::MAX);
            (list_position, card.position)
        });
        Ok(cards)
    }
}
