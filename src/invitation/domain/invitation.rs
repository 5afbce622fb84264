//! Invitation aggregate root and its lifecycle states.

use super::{InvitationId, InvitationToken, ParseInvitationStatusError};
use crate::board::domain::{BoardId, EmailAddress, UserId};
use chrono::{DateTime, Duration, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Days an invitation stays redeemable after issuance.
const EXPIRY_WINDOW_DAYS: i64 = 7;

/// Stored invitation lifecycle status.
///
/// Expiry is intentionally absent: it is derived from `expires_at` at read
/// time and never written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    /// Issued and not yet accepted.
    Pending,
    /// Redeemed; terminal.
    Accepted,
}

impl InvitationStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
        }
    }
}

impl TryFrom<&str> for InvitationStatus {
    type Error = ParseInvitationStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            _ => Err(ParseInvitationStatusError(value.to_owned())),
        }
    }
}

/// Invitation aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    id: InvitationId,
    board_id: BoardId,
    email: EmailAddress,
    invited_by: UserId,
    token: InvitationToken,
    status: InvitationStatus,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted invitation aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedInvitationData {
    /// Persisted invitation identifier.
    pub id: InvitationId,
    /// Persisted target board.
    pub board_id: BoardId,
    /// Persisted invitee address.
    pub email: EmailAddress,
    /// Persisted inviter identifier.
    pub invited_by: UserId,
    /// Persisted token value.
    pub token: InvitationToken,
    /// Persisted lifecycle status.
    pub status: InvitationStatus,
    /// Persisted expiry instant.
    pub expires_at: DateTime<Utc>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    /// Issues a new pending invitation with a fresh token.
    ///
    /// The invitation expires seven days after the clock's current instant.
    #[must_use]
    pub fn issue(
        board_id: BoardId,
        email: EmailAddress,
        invited_by: UserId,
        clock: &impl Clock,
    ) -> Self {
        let now = clock.utc();
        Self {
            id: InvitationId::new(),
            board_id,
            email,
            invited_by,
            token: InvitationToken::generate(),
            status: InvitationStatus::Pending,
            expires_at: now + Duration::days(EXPIRY_WINDOW_DAYS),
            created_at: now,
        }
    }

    /// Reconstructs an invitation from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedInvitationData) -> Self {
        Self {
            id: data.id,
            board_id: data.board_id,
            email: data.email,
            invited_by: data.invited_by,
            token: data.token,
            status: data.status,
            expires_at: data.expires_at,
            created_at: data.created_at,
        }
    }

    /// Returns the invitation identifier.
    #[must_use]
    pub const fn id(&self) -> InvitationId {
        self.id
    }

    /// Returns the board the invitation grants access to.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// Returns the invitee's email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the inviting user's identifier.
    #[must_use]
    pub const fn invited_by(&self) -> UserId {
        self.invited_by
    }

    /// Returns the redemption token.
    #[must_use]
    pub const fn token(&self) -> &InvitationToken {
        &self.token
    }

    /// Returns the stored lifecycle status.
    #[must_use]
    pub const fn status(&self) -> InvitationStatus {
        self.status
    }

    /// Returns the expiry instant.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` when the clock's current instant is past expiry.
    ///
    /// Derived at read time; the stored status is untouched so an expired
    /// pending invitation remains inspectable.
    #[must_use]
    pub fn is_expired(&self, clock: &impl Clock) -> bool {
        clock.utc() > self.expires_at
    }

    /// Returns `true` when the invitation has been accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self.status, InvitationStatus::Accepted)
    }

    /// Transitions the stored status to accepted.
    ///
    /// Storage-side transition invoked under the repository's atomic
    /// compare-and-swap; callers go through
    /// [`InvitationRepository::mark_accepted`](crate::invitation::ports::InvitationRepository::mark_accepted).
    pub const fn mark_accepted(&mut self) {
        self.status = InvitationStatus::Accepted;
    }
}
