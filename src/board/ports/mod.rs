//! Port contracts for board state and user identity.
//!
//! Ports define infrastructure-agnostic interfaces used by the access,
//! invitation, and recommendation services.

pub mod repository;
pub mod users;

pub use repository::{BoardRepository, BoardRepositoryError, BoardRepositoryResult};
pub use users::{UserRepository, UserRepositoryError, UserRepositoryResult};
