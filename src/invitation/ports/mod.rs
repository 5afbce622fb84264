//! Port contracts for invitation persistence and notification.

pub mod notifier;
pub mod repository;

pub use notifier::{InviteeNotifier, NotifyError};
pub use repository::{InvitationRepository, InvitationRepositoryError, InvitationRepositoryResult};

#[cfg(test)]
pub use notifier::MockInviteeNotifier;
