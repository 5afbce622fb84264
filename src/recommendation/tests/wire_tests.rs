//! Tests pinning the JSON wire shape of recommendations.

use chrono::{TimeZone, Utc};
use eyre::ensure;
use rstest::rstest;
use serde_json::json;

use crate::board::domain::{CardId, ListId};
use crate::recommendation::domain::{
    CardRef, Recommendation, RecommendationAction, RecommendationKind, RecommendationPriority,
};

#[rstest]
#[case(RecommendationKind::DueDate, "due-date")]
#[case(RecommendationKind::ListMove, "list-move")]
#[case(RecommendationKind::RelatedCards, "related-cards")]
fn kinds_serialize_as_kebab_case(#[case] kind: RecommendationKind, #[case] wire: &str) {
    assert_eq!(serde_json::to_value(kind).expect("serialize"), json!(wire));
}

#[rstest]
#[case(RecommendationPriority::High, "high")]
#[case(RecommendationPriority::Medium, "medium")]
#[case(RecommendationPriority::Low, "low")]
fn priorities_serialize_as_lowercase(
    #[case] priority: RecommendationPriority,
    #[case] wire: &str,
) {
    assert_eq!(
        serde_json::to_value(priority).expect("serialize"),
        json!(wire)
    );
}

#[rstest]
fn due_date_recommendation_wire_shape() -> eyre::Result<()> {
    let card_id = CardId::new();
    let due_date = Utc
        .with_ymd_and_hms(2025, 6, 2, 12, 0, 0)
        .single()
        .expect("valid instant");
    let recommendation = Recommendation::new(
        RecommendationKind::DueDate,
        CardRef {
            id: card_id,
            title: "Fix login bug ASAP".to_owned(),
        },
        "Set due date for \"Fix login bug ASAP\" - tomorrow",
        RecommendationPriority::High,
        RecommendationAction::SetDueDate { due_date },
    );

    let value = serde_json::to_value(&recommendation)?;
    let expected = json!({
        "id": format!("due-{card_id}"),
        "type": "due-date",
        "card": {
            "id": card_id.to_string(),
            "title": "Fix login bug ASAP",
        },
        "suggestion": "Set due date for \"Fix login bug ASAP\" - tomorrow",
        "priority": "high",
        "action": {
            "type": "set-due-date",
            "due_date": serde_json::to_value(due_date)?,
        },
    });
    ensure!(value == expected, "unexpected wire shape: {value}");
    Ok(())
}

#[rstest]
fn move_action_carries_the_target_list() -> eyre::Result<()> {
    let target_list_id = ListId::new();
    let action = RecommendationAction::MoveCard { target_list_id };

    let value = serde_json::to_value(&action)?;
    let expected = json!({
        "type": "move-card",
        "target_list_id": target_list_id.to_string(),
    });
    ensure!(value == expected, "unexpected wire shape: {value}");
    Ok(())
}
