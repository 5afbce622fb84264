//! Recommendation record and its constituent types.

use crate::board::domain::{Card, CardId, ListId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of suggestion a recommendation carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationKind {
    /// Suggests setting a due date inferred from the card text.
    DueDate,
    /// Suggests moving the card to a sibling list.
    ListMove,
    /// Surfaces other cards on the board with overlapping keywords.
    RelatedCards,
}

impl RecommendationKind {
    /// Returns the prefix used in recommendation identifiers.
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::DueDate => "due",
            Self::ListMove => "move",
            Self::RelatedCards => "related",
        }
    }
}

/// Display priority of a recommendation.
///
/// Ordering is fixed: `High` sorts before `Medium` sorts before `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    /// Surface first.
    High,
    /// Surface after high.
    Medium,
    /// Surface last.
    Low,
}

impl RecommendationPriority {
    /// Returns the sort rank; lower ranks surface first.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// Lightweight reference to a card, as carried in recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRef {
    /// The referenced card's identifier.
    pub id: CardId,
    /// The referenced card's title.
    pub title: String,
}

impl CardRef {
    /// Builds a reference to the given card.
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        Self {
            id: card.id,
            title: card.title.clone(),
        }
    }
}

/// Typed action payload attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RecommendationAction {
    /// Set the card's due date to the computed absolute instant.
    SetDueDate {
        /// The suggested due date.
        due_date: DateTime<Utc>,
    },
    /// Move the card to the named sibling list.
    MoveCard {
        /// The suggested destination list.
        target_list_id: ListId,
    },
    /// Show the related cards found for this card.
    ShowRelated {
        /// Up to three related cards, highest overlap first.
        related_cards: Vec<CardRef>,
    },
}

/// A derived suggestion for a single card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Display identifier, `{kind}-{card id}`; recommendations have no
    /// identity beyond it.
    pub id: String,
    /// Kind of suggestion.
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    /// The card the suggestion applies to.
    pub card: CardRef,
    /// Human-readable suggestion text.
    pub suggestion: String,
    /// Display priority.
    pub priority: RecommendationPriority,
    /// Action payload specific to the kind.
    pub action: RecommendationAction,
}

impl Recommendation {
    /// Creates a recommendation, deriving its identifier from the kind and
    /// card.
    #[must_use]
    pub fn new(
        kind: RecommendationKind,
        card: CardRef,
        suggestion: impl Into<String>,
        priority: RecommendationPriority,
        action: RecommendationAction,
    ) -> Self {
        Self {
            id: format!("{}-{}", kind.id_prefix(), card.id),
            kind,
            card,
            suggestion: suggestion.into(),
            priority,
            action,
        }
    }
}
