//! Extractive summarization used when no model is loaded or its output is
//! rejected.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::utils::text::{truncate_words, word_count};

/// Fragments at or below this many characters are not treated as sentences.
pub const MIN_SENTENCE_CHARS: usize = 20;

static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("static regex compile"));

/// Splits content on runs of `.`, `!` and `?`, keeping trimmed fragments
/// longer than [`MIN_SENTENCE_CHARS`].
#[must_use]
pub fn split_sentences(content: &str) -> Vec<&str> {
    SENTENCE_END_RE
        .split(content)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .collect()
}

/// Builds an extractive summary of at most `target_words` words.
///
/// Picks the first, middle and last sentences when they fit the word budget,
/// then tops up with interior sentences in document order. Selected
/// sentences are joined in the order they were picked, so extra interior
/// sentences land after the last one. Content without any usable sentence
/// is cut to its first `target_words` words.
#[must_use]
pub fn summarize_heuristically(content: &str, target_words: usize) -> String {
    info!("Using fallback summarization method");

    let target_words = target_words.max(1);
    let sentences = split_sentences(content);

    if sentences.is_empty() {
        return clamp_words(content, target_words);
    }

    let selected = select_sentences(&sentences, target_words);

    let mut summary = selected.join(". ");
    if !summary.ends_with('.') {
        summary.push('.');
    }

    clamp_words(&summary, target_words)
}

fn select_sentences<'a>(sentences: &[&'a str], budget: usize) -> Vec<&'a str> {
    let mut selected: Vec<&str> = Vec::new();
    let mut total_words = 0;

    let first = sentences[0];
    let last_idx = sentences.len() - 1;

    let first_words = word_count(first);
    if first_words <= budget / 2 {
        selected.push(first);
        total_words += first_words;
    }

    if sentences.len() > 2 {
        let middle = sentences[sentences.len() / 2];
        let middle_words = word_count(middle);
        if total_words + middle_words <= budget {
            selected.push(middle);
            total_words += middle_words;
        }
    }

    // total < 0.8 * budget
    if sentences.len() > 1 && total_words.saturating_mul(10) < budget.saturating_mul(8) {
        let last = sentences[last_idx];
        let last_words = word_count(last);
        if last != first && total_words + last_words <= budget {
            selected.push(last);
            total_words += last_words;
        }
    }

    for &sentence in sentences.iter().take(last_idx).skip(1) {
        // total >= 0.9 * budget
        if total_words.saturating_mul(10) >= budget.saturating_mul(9) {
            break;
        }
        if selected.contains(&sentence) {
            continue;
        }
        let sentence_words = word_count(sentence);
        if sentence_words <= budget - total_words {
            selected.push(sentence);
            total_words += sentence_words;
        }
    }

    // Nothing fit the budget; the final clamp cuts the opening sentence down.
    if selected.is_empty() {
        selected.push(first);
    }

    selected
}

/// Keeps at most `max_words` words, marking a cut with `...`.
fn clamp_words(text: &str, max_words: usize) -> String {
    if word_count(text) > max_words {
        format!("{}...", truncate_words(text, max_words))
    } else {
        text.trim().to_string()
    }
}
