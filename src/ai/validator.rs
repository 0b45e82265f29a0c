//! Acceptance rules for model completions.
//!
//! Small local models tend to fail in two ways: they echo the prompt
//! template, or they keep writing the source text instead of condensing it.
//! Each rule below is a separate predicate so it can be tested on its own.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::RejectReason;
use crate::utils::text::{truncate_chars, truncate_words};

/// Minimum length, in characters, of an accepted summary.
pub const MIN_SUMMARY_CHARS: usize = 30;

/// Number of leading characters compared by the continuation check.
pub const CONTINUATION_PREFIX_CHARS: usize = 100;

/// Accepted summaries are cut to `target_words * SUMMARY_CHARS_PER_WORD`
/// characters.
pub const SUMMARY_CHARS_PER_WORD: usize = 10;

static TEMPLATE_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:\s*###\s*(?:instruction|input|response)\s*:?)+")
        .expect("static regex compile")
});

static LEAD_IN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:the main points are:?|here is.*?summary:?|summary:?)")
        .expect("static regex compile")
});

static INSTRUCTIONAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:the text|this text|in summary|to summarize)\b[,:]?")
        .expect("static regex compile")
});

/// Strips echoed template markers and boilerplate lead-ins from the start of
/// a completion and collapses its whitespace.
#[must_use]
pub fn strip_template_residue(candidate: &str) -> String {
    let text = TEMPLATE_MARKER_RE.replace(candidate.trim(), "");
    let text = LEAD_IN_RE.replace(text.trim(), "");
    let text = truncate_words(&text, usize::MAX);
    INSTRUCTIONAL_RE.replace(&text, "").trim().to_string()
}

#[must_use]
pub fn is_insufficient(cleaned: &str) -> bool {
    cleaned.trim().chars().count() < MIN_SUMMARY_CHARS
}

/// True when the completion merely repeats or continues the source: the
/// lower-cased leading characters of one contain those of the other.
#[must_use]
pub fn looks_like_continuation(cleaned: &str, source: &str) -> bool {
    let summary_start = truncate_chars(cleaned, CONTINUATION_PREFIX_CHARS).to_lowercase();
    let source_start = truncate_chars(source, CONTINUATION_PREFIX_CHARS).to_lowercase();

    source_start.contains(&summary_start) || summary_start.contains(&source_start)
}

/// Decides whether a completion is usable as a summary of `source`.
///
/// # Errors
///
/// Returns the first rule the cleaned completion breaks.
pub fn validate(
    candidate: &str,
    source: &str,
    target_words: usize,
) -> Result<String, RejectReason> {
    let cleaned = strip_template_residue(candidate);

    if is_insufficient(&cleaned) {
        return Err(RejectReason::InsufficientContent(cleaned.chars().count()));
    }

    if looks_like_continuation(&cleaned, source) {
        return Err(RejectReason::LooksLikeContinuation);
    }

    let limit = target_words.saturating_mul(SUMMARY_CHARS_PER_WORD);
    Ok(truncate_chars(&cleaned, limit).trim_end().to_string())
}
