//! Unit tests for the text-analysis primitives.

use crate::recommendation::signals::{card_text, extract_keywords, matches_any};
use rstest::rstest;

#[rstest]
fn card_text_lowercases_and_concatenates() {
    assert_eq!(
        card_text("Fix LOGIN Bug", Some("Blocks the Release")),
        "fix login bug blocks the release"
    );
}

#[rstest]
fn card_text_treats_missing_description_as_empty() {
    assert_eq!(card_text("Fix login bug", None), "fix login bug ");
}

#[rstest]
fn matches_any_finds_substrings() {
    let text = "deploy the hotfix asap";
    assert!(matches_any(text, &["urgent", "asap"]));
    assert!(!matches_any(text, &["tomorrow", "next week"]));
}

#[rstest]
fn extract_keywords_drops_short_tokens() {
    let keywords = extract_keywords("fix the api bug in auth flow now");
    assert_eq!(keywords, vec!["auth".to_owned(), "flow".to_owned()]);
}

#[rstest]
#[case("the")]
#[case("this")]
#[case("that")]
#[case("with")]
#[case("from")]
#[case("have")]
#[case("are")]
fn extract_keywords_drops_stop_words(#[case] stop_word: &str) {
    let text = format!("{stop_word} database");
    assert_eq!(extract_keywords(&text), vec!["database".to_owned()]);
}

#[rstest]
fn extract_keywords_keeps_first_five_in_order() {
    let keywords =
        extract_keywords("alpha bravo charlie delta echo foxtrot golf");
    assert_eq!(
        keywords,
        vec![
            "alpha".to_owned(),
            "bravo".to_owned(),
            "charlie".to_owned(),
            "delta".to_owned(),
            "echo".to_owned(),
        ]
    );
}

#[rstest]
fn extract_keywords_of_empty_text_is_empty() {
    assert!(extract_keywords("").is_empty());
}
