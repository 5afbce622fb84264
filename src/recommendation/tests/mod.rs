//! Unit tests for the recommendation module.
//!
//! Tests pin the exact keyword lists and tier precedence of the analysis
//! rules, the crude keyword extraction, and the engine's ordering contract.

mod rules_tests;
mod signals_tests;
mod wire_tests;
