//! Board membership and access control.
//!
//! This module owns the board-side entities (users, boards, collaborations,
//! lists, cards), the access classification that gates every board
//! operation, and the repository ports the rest of the crate reads board
//! state through. The module follows hexagonal architecture:
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
