//! Domain model for board invitations.
//!
//! An invitation is issued `pending`, may be accepted exactly once, and
//! expires seven days after issuance. Expiry is derived at read time from
//! `expires_at`; the stored status never transitions to an "expired" value,
//! so an expired-but-unaccepted invitation stays distinguishable from an
//! invalid one when audited.

mod error;
mod ids;
mod invitation;
mod token;

pub use error::ParseInvitationStatusError;
pub use ids::InvitationId;
pub use invitation::{Invitation, InvitationStatus, PersistedInvitationData};
pub use token::InvitationToken;
