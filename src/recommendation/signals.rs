//! Stateless text-analysis primitives.
//!
//! All analysis operates on the lowercased concatenation of a card's title
//! and description, with a missing description treated as empty. Keyword
//! extraction is an intentionally crude signal: whitespace tokens, no
//! stemming.

/// Maximum number of keywords extracted from a card.
pub const MAX_KEYWORDS: usize = 5;

/// Tokens too common to signal anything.
const STOP_WORDS: [&str; 7] = ["the", "this", "that", "with", "from", "have", "are"];

/// Builds the lowercased analysis text for a `(title, description)` pair.
#[must_use]
pub fn card_text(title: &str, description: Option<&str>) -> String {
    format!("{title} {}", description.unwrap_or_default()).to_lowercase()
}

/// Returns `true` when any keyword occurs as a substring of `text`.
///
/// `text` is expected to already be lowercased (see [`card_text`]); the
/// keyword lists this crate matches against are lowercase.
#[must_use]
pub fn matches_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Extracts up to [`MAX_KEYWORDS`] tokens from lowercased text.
///
/// Splits on whitespace, discards tokens of length three or shorter and
/// stop words, and keeps the first five survivors in original order.
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| word.len() > 3 && !STOP_WORDS.contains(word))
        .take(MAX_KEYWORDS)
        .map(str::to_owned)
        .collect()
}
