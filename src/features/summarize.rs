use std::sync::Arc;
use tracing::{debug, info, warn};

use super::fallback::summarize_heuristically;
use crate::ai::model::{CompletionModel, CompletionParams};
use crate::ai::validator;
use crate::core::models::{MIN_CONTENT_CHARS, SummarizationRequest, SummaryMethod, SummaryResult};
use crate::errors::{ModelFailure, SummarizerError};
use crate::prompt::build_prompt;
use crate::utils::text::{normalize_content, truncate_chars, word_count};

/// Normalized content shorter than this is returned as-is.
pub const MINIMAL_CONTENT_CHARS: usize = 50;

/// Runs the summary-selection pipeline: normalize, try the model when one is
/// loaded, validate its output, and fall back to the extractive summary on
/// any failure.
#[derive(Clone, Default)]
pub struct Summarizer {
    model: Option<Arc<dyn CompletionModel>>,
}

impl Summarizer {
    #[must_use]
    pub fn new(model: Option<Arc<dyn CompletionModel>>) -> Self {
        Self { model }
    }

    #[must_use]
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    #[must_use]
    pub fn model_name(&self) -> Option<&str> {
        self.model.as_deref().map(|model| model.name())
    }

    /// Summarizes one request.
    ///
    /// # Errors
    ///
    /// Only invalid input is reported. Model failures are logged and
    /// replaced by the heuristic summary.
    pub async fn summarize(
        &self,
        request: &SummarizationRequest,
    ) -> Result<SummaryResult, SummarizerError> {
        validate_request(request)?;

        let target_words = request.max_length;
        let clean_text = normalize_content(&request.content);
        let original_length = word_count(&request.content);

        if clean_text.chars().count() < MINIMAL_CONTENT_CHARS {
            info!(
                "Content is very short ({} chars), using minimal processing",
                clean_text.chars().count()
            );
            return Ok(SummaryResult::new(
                clean_text,
                original_length,
                SummaryMethod::Minimal,
            ));
        }

        info!(
            "Summarizing content: {} words -> target: {} words",
            original_length, target_words
        );

        let (summary, method) = match self.model.as_deref() {
            Some(model) => match attempt_model(model, &clean_text, target_words).await {
                Ok(summary) => {
                    info!("Successfully used AI model for summarization");
                    (summary, SummaryMethod::AiModel)
                }
                Err(e) => {
                    warn!("{}, using fallback", e);
                    (
                        summarize_heuristically(&clean_text, target_words),
                        SummaryMethod::Fallback,
                    )
                }
            },
            None => {
                info!("No model loaded, using fallback summarization");
                (
                    summarize_heuristically(&clean_text, target_words),
                    SummaryMethod::Fallback,
                )
            }
        };

        let result = SummaryResult::new(summary, original_length, method);
        info!(
            "Summary generated: {} words using {}",
            result.word_count, result.method
        );

        Ok(result)
    }
}

/// Checks the request before any processing happens.
///
/// # Errors
///
/// Returns an error for content under [`MIN_CONTENT_CHARS`] trimmed
/// characters or a zero `max_length`.
pub fn validate_request(request: &SummarizationRequest) -> Result<(), SummarizerError> {
    if request.content.trim().chars().count() < MIN_CONTENT_CHARS {
        return Err(SummarizerError::ContentTooShort);
    }
    if request.max_length == 0 {
        return Err(SummarizerError::InvalidTargetLength(request.max_length));
    }
    Ok(())
}

/// One model round trip: prompt, complete, validate.
async fn attempt_model(
    model: &dyn CompletionModel,
    clean_text: &str,
    target_words: usize,
) -> Result<String, ModelFailure> {
    info!("Using AI model {} for summarization", model.name());

    let prompt = build_prompt(clean_text, target_words);
    let params = CompletionParams::for_summary(target_words);

    let raw = model.complete(&prompt, &params).await?;
    debug!("Raw model response: {}...", truncate_chars(raw.trim(), 150));

    Ok(validator::validate(&raw, clean_text, target_words)?)
}
