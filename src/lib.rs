//! Trellis: collaborative task-board core.
//!
//! This crate provides the authorisation, invitation, and recommendation
//! logic behind a multi-user task board (boards of lists, lists of cards,
//! collaboration by invitation). Request parsing, rendering, and the
//! persistence layer itself live outside the crate and talk to it through
//! ports.
//!
//! # Architecture
//!
//! Trellis follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores,
//!   notification rendering)
//!
//! # Modules
//!
//! - [`board`]: Board entities, access classification, and repositories
//! - [`invitation`]: Invitation lifecycle from issuance to acceptance
//! - [`recommendation`]: Rule-based suggestions derived from board content

pub mod board;
pub mod invitation;
pub mod recommendation;

#[cfg(test)]
pub(crate) mod test_support;
