//! Invitation lifecycle management.
//!
//! This module turns outsiders into collaborators: the board owner issues a
//! single-use, expiring invitation token; the invitee redeems it with a
//! matching email address; acceptance atomically records the collaboration.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
