//! Registered user identity.

use super::{EmailAddress, UserId};
use serde::{Deserialize, Serialize};

/// A registered user as known to the access and invitation layers.
///
/// Immutable once created; password-hash rotation and other credential
/// concerns live outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Normalized login email address.
    pub email: EmailAddress,
    /// Display name.
    pub name: String,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(id: UserId, email: EmailAddress, name: impl Into<String>) -> Self {
        Self {
            id,
            email,
            name: name.into(),
        }
    }
}
