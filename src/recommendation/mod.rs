//! Rule-based recommendations derived from board content.
//!
//! The engine inspects card text and board structure and produces ranked,
//! typed suggestions: set a due date, move a card to another list, surface
//! related cards. Text analysis is deterministic keyword matching over
//! fixed lists, deliberately not a learned model or a pluggable scoring
//! framework.
//!
//! - Recommendation types in [`domain`]
//! - Text-analysis primitives in [`signals`]
//! - Per-card analysis rules in [`rules`]
//! - The orchestrating engine in [`services`]

pub mod domain;
pub mod rules;
pub mod services;
pub mod signals;

#[cfg(test)]
mod tests;
