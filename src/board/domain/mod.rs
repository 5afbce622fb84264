//! Domain model for boards and their membership.
//!
//! The board domain models board ownership, collaboration membership, and
//! the list/card records that hang off a board, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod access;
mod board;
mod card;
mod collaboration;
mod email;
mod error;
mod ids;
mod list;
mod user;

pub use access::BoardRole;
pub use board::{Board, PersistedBoardData};
pub use card::{Card, CardPriority};
pub use collaboration::Collaboration;
pub use email::EmailAddress;
pub use error::{BoardDomainError, ParseCardPriorityError};
pub use ids::{BoardId, CardId, ListId, UserId};
pub use list::List;
pub use user::User;
