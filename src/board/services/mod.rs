//! Application services for board access control.

mod access;

pub use access::{AccessError, AccessResult, BoardAccessService};
