use local_summarizer::ai::validator::{
    MIN_SUMMARY_CHARS, is_insufficient, looks_like_continuation, strip_template_residue, validate,
};
use local_summarizer::errors::RejectReason;

const SOURCE: &str = "The city council met on Tuesday to discuss the new budget proposal, \
                      which includes funding for parks, libraries and road repairs across all districts.";

#[test]
fn test_strip_main_points_cue() {
    assert_eq!(
        strip_template_residue("The main points are: Rust is fast and safe for systems."),
        "Rust is fast and safe for systems."
    );
}

#[test]
fn test_strip_template_markers_and_summary_label() {
    assert_eq!(
        strip_template_residue("### Response:\nSummary: The article covers budgets."),
        "The article covers budgets."
    );
}

#[test]
fn test_strip_here_is_summary_lead_in() {
    assert_eq!(
        strip_template_residue("Here is a short summary: Parks get more money."),
        "Parks get more money."
    );
}

#[test]
fn test_strip_instructional_phrases() {
    assert_eq!(
        strip_template_residue("In summary, the council approved funding."),
        "the council approved funding."
    );
    assert_eq!(
        strip_template_residue("this text describes a vote."),
        "describes a vote."
    );
}

#[test]
fn test_strip_leaves_words_that_only_share_a_prefix() {
    assert_eq!(
        strip_template_residue("The textbook covers ownership."),
        "The textbook covers ownership."
    );
}

#[test]
fn test_strip_collapses_whitespace() {
    assert_eq!(
        strip_template_residue("  Parks,\n\n  libraries   and roads.  "),
        "Parks, libraries and roads."
    );
}

#[test]
fn test_is_insufficient_threshold() {
    assert!(is_insufficient("too short"));
    assert!(is_insufficient(&"a".repeat(MIN_SUMMARY_CHARS - 1)));
    assert!(!is_insufficient(&"a".repeat(MIN_SUMMARY_CHARS)));
}

#[test]
fn test_continuation_detected_case_insensitively() {
    let prefix: String = SOURCE.chars().take(100).collect();
    let candidate = format!("{} and then it kept going.", prefix.to_uppercase());
    assert!(looks_like_continuation(&candidate, SOURCE));
}

#[test]
fn test_continuation_detected_when_candidate_is_source_prefix() {
    assert!(looks_like_continuation(
        "The city council met on Tuesday",
        SOURCE
    ));
}

#[test]
fn test_distinct_candidate_is_not_continuation() {
    assert!(!looks_like_continuation(
        "Council weighs budget boosting parks, libraries and roads.",
        SOURCE
    ));
}

#[test]
fn test_validate_rejects_short_output() {
    assert_eq!(
        validate("Summary: ok", SOURCE, 150),
        Err(RejectReason::InsufficientContent(2))
    );
    assert_eq!(
        validate("   ", SOURCE, 150),
        Err(RejectReason::InsufficientContent(0))
    );
}

#[test]
fn test_validate_rejects_continuation() {
    let candidate = format!("{SOURCE} The meeting ended late in the evening.");
    assert_eq!(
        validate(&candidate, SOURCE, 150),
        Err(RejectReason::LooksLikeContinuation)
    );
}

#[test]
fn test_validate_accepts_distinct_summary() {
    let result = validate(
        "The main points are: Council weighs budget boosting parks, libraries and roads.",
        SOURCE,
        150,
    );
    assert_eq!(
        result,
        Ok("Council weighs budget boosting parks, libraries and roads.".to_string())
    );
}

#[test]
fn test_validate_truncates_to_character_bound() {
    let candidate = "Council weighs budget boosting parks, libraries and roads across every district.";
    let accepted = validate(candidate, SOURCE, 5).expect("distinct candidate is accepted");

    assert!(accepted.chars().count() <= 50);
    assert!(candidate.starts_with(&accepted));
}
