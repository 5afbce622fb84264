//! Application services for recommendation generation.

mod engine;

pub use engine::RecommendationEngine;
