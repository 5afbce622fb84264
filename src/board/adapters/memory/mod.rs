//! In-memory adapters for the board ports.

mod board;
mod user;

pub use board::InMemoryBoardRepository;
pub use user::InMemoryUserRepository;
