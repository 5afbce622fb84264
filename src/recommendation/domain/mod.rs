//! Domain types for board recommendations.
//!
//! Recommendations are derived values: recomputed on every request, never
//! persisted, identified only by `{kind}-{card id}` for deduplication and
//! display.

mod recommendation;

pub use recommendation::{
    CardRef, Recommendation, RecommendationAction, RecommendationKind, RecommendationPriority,
};
