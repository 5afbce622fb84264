//! Unit tests for board domain values.

use crate::board::domain::{
    Board, BoardDomainError, CardPriority, EmailAddress, ParseCardPriorityError, UserId,
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[case("alice@example.com", "alice@example.com")]
#[case("  Alice@Example.COM  ", "alice@example.com")]
#[case("bob.smith@mail.example.org", "bob.smith@mail.example.org")]
fn email_normalises_case_and_whitespace(#[case] input: &str, #[case] expected: &str) {
    let email = EmailAddress::new(input).expect("address should validate");
    assert_eq!(email.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("no-at-sign")]
#[case("@example.com")]
#[case("alice@")]
#[case("alice@@example.com")]
#[case("ali ce@example.com")]
fn email_rejects_malformed_addresses(#[case] input: &str) {
    assert!(matches!(
        EmailAddress::new(input),
        Err(BoardDomainError::InvalidEmail(_))
    ));
}

#[rstest]
fn emails_differing_only_in_case_compare_equal() {
    let lower = EmailAddress::new("carol@example.com").expect("valid address");
    let upper = EmailAddress::new("CAROL@EXAMPLE.COM").expect("valid address");
    assert_eq!(lower, upper);
}

#[rstest]
fn board_requires_non_empty_title() {
    let result = Board::new("   ", None, UserId::new(), &DefaultClock);
    assert!(matches!(result, Err(BoardDomainError::EmptyBoardTitle)));
}

#[rstest]
fn board_retains_owner_and_description() {
    let owner = UserId::new();
    let board = Board::new(
        "Launch plan",
        Some("Q3 launch tracking".to_owned()),
        owner,
        &DefaultClock,
    )
    .expect("board should build");

    assert_eq!(board.owner_id(), owner);
    assert_eq!(board.title(), "Launch plan");
    assert_eq!(board.description(), Some("Q3 launch tracking"));
}

#[rstest]
#[case(CardPriority::Low, "low")]
#[case(CardPriority::Medium, "medium")]
#[case(CardPriority::High, "high")]
#[case(CardPriority::Unset, "unset")]
fn card_priority_round_trips_through_storage_form(
    #[case] priority: CardPriority,
    #[case] stored: &str,
) {
    assert_eq!(priority.as_str(), stored);
    assert_eq!(CardPriority::try_from(stored), Ok(priority));
}

#[rstest]
fn card_priority_parse_is_case_insensitive() {
    assert_eq!(CardPriority::try_from(" HIGH "), Ok(CardPriority::High));
}

#[rstest]
fn card_priority_rejects_unknown_values() {
    assert_eq!(
        CardPriority::try_from("urgent"),
        Err(ParseCardPriorityError("urgent".to_owned()))
    );
}

#[rstest]
fn card_priority_defaults_to_unset() {
    assert_eq!(CardPriority::default(), CardPriority::Unset);
}
