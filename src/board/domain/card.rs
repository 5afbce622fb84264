//! Card record and priority scale.

use super::{CardId, ListId, ParseCardPriorityError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-assigned card priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardPriority {
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
    /// No priority assigned.
    #[default]
    Unset,
}

impl CardPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unset => "unset",
        }
    }
}

impl TryFrom<&str> for CardPriority {
    type Error = ParseCardPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "unset" => Ok(Self::Unset),
            _ => Err(ParseCardPriorityError(value.to_owned())),
        }
    }
}

/// A card within a list.
///
/// A card belongs to exactly one list at a time; `position` is unique and
/// dense within that list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique card identifier.
    pub id: CardId,
    /// The list this card currently sits in.
    pub list_id: ListId,
    /// Card title.
    pub title: String,
    /// Free-form card description, if any.
    pub description: Option<String>,
    /// Due date, if one has been set.
    pub due_date: Option<DateTime<Utc>>,
    /// User-assigned priority.
    pub priority: CardPriority,
    /// Free-form label, if any.
    pub label: Option<String>,
    /// Zero-based render position within the list.
    pub position: u32,
}

impl Card {
    /// Creates a card record with no due date, label, or priority.
    #[must_use]
    pub fn new(list_id: ListId, title: impl Into<String>, position: u32) -> Self {
        Self {
            id: CardId::new(),
            list_id,
            title: title.into(),
            description: None,
            due_date: None,
            priority: CardPriority::Unset,
            label: None,
            position,
        }
    }

    /// Sets the card description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the card due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the card priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: CardPriority) -> Self {
        self.priority = priority;
        self
    }
}
