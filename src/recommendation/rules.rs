//! Per-card analysis rules.
//!
//! Each rule is a pure function over card text and board structure. The
//! keyword lists and their precedence are the contract: fixed tiers,
//! first match wins, pinned by tests.

use crate::board::domain::{Card, List, ListId};
use crate::recommendation::domain::{CardRef, RecommendationPriority};
use crate::recommendation::signals;

const URGENT_KEYWORDS: [&str; 6] = [
    "urgent",
    "asap",
    "immediately",
    "critical",
    "emergency",
    "deadline",
];

const HIGH_PRIORITY_KEYWORDS: [&str; 5] = ["soon", "quickly", "fast", "high priority", "important"];

const IN_PROGRESS_KEYWORDS: [&str; 5] = ["started", "in progress", "working on", "begun", "underway"];

const DONE_KEYWORDS: [&str; 5] = ["done", "completed", "finished", "ready", "deployed"];

/// Maximum number of related cards surfaced per card.
pub const MAX_RELATED_CARDS: usize = 3;

/// Outcome of the due-date analysis: a relative offset and its urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDateSignal {
    /// Days from now the due date should land.
    pub offset_days: i64,
    /// Priority of the resulting recommendation.
    pub priority: RecommendationPriority,
}

const fn due_signal(offset_days: i64, priority: RecommendationPriority) -> Option<DueDateSignal> {
    Some(DueDateSignal {
        offset_days,
        priority,
    })
}

/// Scans card text for due-date wording.
///
/// Tiers are checked in fixed precedence; the first match wins and later
/// tiers are not consulted. Returns `None` when no tier matches. Callers
/// must suppress the signal entirely for cards that already carry a due
/// date.
#[must_use]
pub fn analyze_due_date(title: &str, description: Option<&str>) -> Option<DueDateSignal> {
    let text = signals::card_text(title, description);

    if signals::matches_any(&text, &URGENT_KEYWORDS) {
        return due_signal(1, RecommendationPriority::High);
    }
    if signals::matches_any(&text, &HIGH_PRIORITY_KEYWORDS) {
        return due_signal(3, RecommendationPriority::Medium);
    }
    if text.contains("tomorrow") {
        return due_signal(1, RecommendationPriority::High);
    }
    if text.contains("today") {
        return due_signal(0, RecommendationPriority::High);
    }
    if text.contains("next week") {
        return due_signal(7, RecommendationPriority::Low);
    }
    if text.contains("next month") {
        return due_signal(30, RecommendationPriority::Low);
    }
    None
}

/// Outcome of the list-move analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMoveSignal {
    /// The suggested destination list.
    pub target_list_id: ListId,
    /// Priority of the resulting recommendation.
    pub priority: RecommendationPriority,
    /// Human-readable suggestion text.
    pub suggestion: String,
}

/// Scans card text for wording that belongs in a different list.
///
/// The in-progress check runs first, then the completion check; at most
/// one signal is emitted per card. A check only fires when the card's
/// current list does not already look like the destination and a distinct
/// sibling list with a matching title exists.
#[must_use]
pub fn analyze_list_move(
    card_title: &str,
    card_description: Option<&str>,
    current_list: &List,
    lists: &[List],
) -> Option<ListMoveSignal> {
    let text = signals::card_text(card_title, card_description);
    let current_title = current_list.title.to_lowercase();

    if !current_title.contains("in progress") && signals::matches_any(&text, &IN_PROGRESS_KEYWORDS)
    {
        if let Some(target) = find_list_titled(lists, &["progress", "doing"]) {
            if target.id != current_list.id {
                return Some(ListMoveSignal {
                    target_list_id: target.id,
                    priority: RecommendationPriority::Medium,
                    suggestion: format!(
                        "Move to \"{}\" - card mentions \"started\" or \"in progress\"",
                        target.title
                    ),
                });
            }
        }
    }

    if !current_title.contains("done") && signals::matches_any(&text, &DONE_KEYWORDS) {
        if let Some(target) = find_list_titled(lists, &["done", "completed", "finished"]) {
            if target.id != current_list.id {
                return Some(ListMoveSignal {
                    target_list_id: target.id,
                    priority: RecommendationPriority::High,
                    suggestion: format!(
                        "Move to \"{}\" - card content suggests completion",
                        target.title
                    ),
                });
            }
        }
    }

    None
}

/// First list whose lowercased title contains any of the needles.
fn find_list_titled<'a>(lists: &'a [List], needles: &[&str]) -> Option<&'a List> {
    lists.iter().find(|list| {
        let title = list.title.to_lowercase();
        needles.iter().any(|needle| title.contains(needle))
    })
}

/// Finds the cards on the board most related to the given card.
///
/// Extracts up to five keywords from the card's own text and scores every
/// other card by how many of those keywords its text contains. Cards with
/// a positive score are kept, sorted by descending score (stable, so ties
/// keep scan order), and capped at [`MAX_RELATED_CARDS`].
#[must_use]
pub fn find_related_cards(card: &Card, all_cards: &[Card]) -> Vec<CardRef> {
    let own_text = signals::card_text(&card.title, card.description.as_deref());
    let keywords = signals::extract_keywords(&own_text);

    let mut scored: Vec<(CardRef, usize)> = Vec::new();
    for other in all_cards {
        if other.id == card.id {
            continue;
        }
        let text = signals::card_text(&other.title, other.description.as_deref());
        let score = keywords
            .iter()
            .filter(|keyword| text.contains(keyword.as_str()))
            .count();
        if score > 0 {
            scored.push((CardRef::from_card(other), score));
        }
    }

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(MAX_RELATED_CARDS);
    scored.into_iter().map(|(card_ref, _)| card_ref).collect()
}
