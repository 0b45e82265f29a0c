use once_cell::sync::Lazy;
use regex::Regex;

/// Hard cap on the number of words kept from incoming content.
pub const MAX_CONTENT_WORDS: usize = 1000;

static DISALLOWED_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.,!?:;\-]").expect("static regex compile"));

/// Cleans raw request content into a bounded, model-safe string.
///
/// Every character outside word characters, whitespace and `. , ! ? - : ;`
/// is replaced by a space, whitespace runs collapse to a single space, and
/// the result keeps at most [`MAX_CONTENT_WORDS`] words. Never fails; input
/// made only of disallowed characters yields an empty string.
#[must_use]
pub fn normalize_content(raw: &str) -> String {
    let restricted = DISALLOWED_CHARS_RE.replace_all(raw, " ");
    truncate_words(&restricted, MAX_CONTENT_WORDS)
}

#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First `max_words` whitespace-delimited words joined by single spaces.
#[must_use]
pub fn truncate_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First `max_chars` characters of `text`, never splitting a code point.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
