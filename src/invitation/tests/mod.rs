//! Unit tests for the invitation module.
//!
//! Tests are organised by concern: token and aggregate behaviour, the
//! ledger's lifecycle orchestration, and notification rendering.
