//! Recommendation engine orchestrating the per-card rules over a board.

use crate::board::{
    domain::{BoardId, Card, List},
    ports::{BoardRepository, BoardRepositoryResult},
};
use crate::recommendation::domain::{
    CardRef, Recommendation, RecommendationAction, RecommendationKind, RecommendationPriority,
};
use crate::recommendation::rules;
use chrono::{DateTime, Duration, Utc};
use mockable::Clock;
use std::sync::Arc;

/// Generates ranked recommendations for a board.
///
/// `generate` is a pure read over current board contents: freshly computed
/// on every call, no caching, no locking. Authorisation is the caller's
/// concern: the access guard must have admitted the caller, and board
/// existence is checked there too.
#[derive(Clone)]
pub struct RecommendationEngine<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    boards: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> RecommendationEngine<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new recommendation engine.
    #[must_use]
    pub const fn new(boards: Arc<R>, clock: Arc<C>) -> Self {
        Self { boards, clock }
    }

    /// Generates the full recommendation set for a board.
    ///
    /// Cards are scanned in board order (lists ascending by position, cards
    /// ascending within each list); per card the due-date, list-move, and
    /// related-cards rules run in that order. The combined sequence is then
    /// stably sorted by priority, high first, so equal-priority
    /// recommendations keep their scan order.
    ///
    /// # Errors
    ///
    /// Returns the repository error when reading lists or cards fails.
    pub async fn generate(&self, board_id: BoardId) -> BoardRepositoryResult<Vec<Recommendation>> {
        let lists = self.boards.lists_for_board(board_id).await?;
        let cards = self.boards.cards_for_board(board_id).await?;
        let now = self.clock.utc();

        let mut recommendations = Vec::new();
        for card in &cards {
            let Some(list) = lists.iter().find(|list| list.id == card.list_id) else {
                continue;
            };
            if let Some(recommendation) = due_date_recommendation(card, now) {
                recommendations.push(recommendation);
            }
            if let Some(recommendation) = list_move_recommendation(card, list, &lists) {
                recommendations.push(recommendation);
            }
            if let Some(recommendation) = related_cards_recommendation(card, &cards) {
                recommendations.push(recommendation);
            }
        }

        recommendations.sort_by_key(|recommendation| recommendation.priority.rank());
        Ok(recommendations)
    }
}

fn due_date_recommendation(card: &Card, now: DateTime<Utc>) -> Option<Recommendation> {
    // Never suggest changing an existing due date.
    if card.due_date.is_some() {
        return None;
    }
    let signal = rules::analyze_due_date(&card.title, card.description.as_deref())?;
    let due_date = now + Duration::days(signal.offset_days);
    let suggestion = format!(
        "Set due date for \"{}\" - {}",
        card.title,
        relative_day_text(signal.offset_days)
    );
    Some(Recommendation::new(
        RecommendationKind::DueDate,
        CardRef::from_card(card),
        suggestion,
        signal.priority,
        RecommendationAction::SetDueDate { due_date },
    ))
}

fn list_move_recommendation(card: &Card, current_list: &List, lists: &[List]) -> Option<Recommendation> {
    let signal =
        rules::analyze_list_move(&card.title, card.description.as_deref(), current_list, lists)?;
    Some(Recommendation::new(
        RecommendationKind::ListMove,
        CardRef::from_card(card),
        signal.suggestion,
        signal.priority,
        RecommendationAction::MoveCard {
            target_list_id: signal.target_list_id,
        },
    ))
}

fn related_cards_recommendation(card: &Card, all_cards: &[Card]) -> Option<Recommendation> {
    let related = rules::find_related_cards(card, all_cards);
    if related.is_empty() {
        return None;
    }
    let plural = if related.len() > 1 { "s" } else { "" };
    let suggestion = format!(
        "\"{}\" is related to {} other card{plural}",
        card.title,
        related.len()
    );
    Some(Recommendation::new(
        RecommendationKind::RelatedCards,
        CardRef::from_card(card),
        suggestion,
        RecommendationPriority::Low,
        RecommendationAction::ShowRelated {
            related_cards: related,
        },
    ))
}

fn relative_day_text(days: i64) -> String {
    match days {
        0 => "today".to_owned(),
        1 => "tomorrow".to_owned(),
        7 => "next week".to_owned(),
        30 => "next month".to_owned(),
        other => format!("in {other} days"),
    }
}
