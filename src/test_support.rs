//! Shared fixtures for unit tests.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

use crate::board::domain::{Board, EmailAddress, User, UserId};

/// Clock pinned to a fixed instant for deterministic time arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a user with the given address.
pub fn user_with_email(email: &str) -> User {
    User::new(
        UserId::new(),
        EmailAddress::new(email).expect("valid test email"),
        "Test User",
    )
}

/// Builds a board owned by the given user.
pub fn board_owned_by(owner: UserId, title: &str) -> Board {
    Board::new(title, None, owner, &mockable::DefaultClock).expect("valid test board")
}
