//! Unit tests for the board module.
//!
//! Tests are organised by concern: pure classification, domain value
//! validation, and the access-guard service over the in-memory adapters.

mod domain_tests;
