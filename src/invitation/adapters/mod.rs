//! Adapter implementations of the invitation ports.

pub mod memory;
pub mod notification;
