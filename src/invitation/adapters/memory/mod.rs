//! In-memory adapters for the invitation ports.

mod invitation;

pub use invitation::InMemoryInvitationRepository;
