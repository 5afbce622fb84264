//! In-memory repository for invitation persistence.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::domain::BoardId;
use crate::invitation::{
    domain::{Invitation, InvitationId, InvitationToken},
    ports::{InvitationRepository, InvitationRepositoryError, InvitationRepositoryResult},
};

/// Thread-safe in-memory invitation repository.
///
/// `mark_accepted` runs under a single write lock, giving the
/// compare-and-swap acceptance semantics the port requires.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInvitationRepository {
    state: Arc<RwLock<InMemoryInvitationState>>,
}

#[derive(Debug, Default)]
struct InMemoryInvitationState {
    invitations: HashMap<InvitationId, Invitation>,
    token_index: HashMap<InvitationToken, InvitationId>,
}

impl InMemoryInvitationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> InvitationRepositoryError {
    InvitationRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl InvitationRepository for InMemoryInvitationRepository {
    async fn insert(&self, invitation: &Invitation) -> InvitationRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.invitations.contains_key(&invitation.id()) {
            return Err(InvitationRepositoryError::DuplicateInvitation(
                invitation.id(),
            ));
        }
        if state.token_index.contains_key(invitation.token()) {
            return Err(InvitationRepositoryError::DuplicateToken);
        }
        state
            .token_index
            .insert(invitation.token().clone(), invitation.id());
        state.invitations.insert(invitation.id(), invitation.clone());
        Ok(())
    }

    async fn find_by_token(
        &self,
        token: &InvitationToken,
    ) -> InvitationRepositoryResult<Option<Invitation>> {
        let state = self.state.read().map_err(lock_error)?;
        let invitation = state
            .token_index
            .get(token)
            .and_then(|id| state.invitations.get(id))
            .cloned();
        Ok(invitation)
    }

    async fn list_for_board(
        &self,
        board_id: BoardId,
    ) -> InvitationRepositoryResult<Vec<Invitation>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut invitations: Vec<Invitation> = state
            .invitations
            .values()
            .filter(|invitation| invitation.board_id() == board_id)
            .cloned()
            .collect();
        invitations.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(invitations)
    }

    async fn mark_accepted(&self, id: InvitationId) -> InvitationRepositoryResult<Invitation> {
        let mut state = self.state.write().map_err(lock_error)?;
        let invitation = state
            .invitations
            .get_mut(&id)
            .ok_or(InvitationRepositoryError::NotFound(id))?;
        if invitation.is_accepted() {
            return Err(InvitationRepositoryError::AlreadyAccepted(id));
        }
        invitation.mark_accepted();
        Ok(invitation.clone())
    }
}
