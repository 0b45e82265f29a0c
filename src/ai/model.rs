//! Completion capability supplied by an external inference engine.

use async_trait::async_trait;

use crate::errors::ModelError;
use crate::prompt::STOP_SEQUENCES;

/// Extra tokens allowed on top of the target word count.
pub const TOKEN_HEADROOM: usize = 20;

/// Low temperature keeps small models on-task.
pub const SUMMARY_TEMPERATURE: f32 = 0.1;
pub const SUMMARY_TOP_P: f32 = 0.7;

/// Sampling parameters for a single completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub max_tokens: usize,
    pub temperature: f32,
    pub top_p: f32,
    pub stop: Vec<String>,
}

impl CompletionParams {
    /// Parameters used for summaries of roughly `target_words` words.
    #[must_use]
    pub fn for_summary(target_words: usize) -> Self {
        Self {
            max_tokens: target_words.saturating_add(TOKEN_HEADROOM),
            temperature: SUMMARY_TEMPERATURE,
            top_p: SUMMARY_TOP_P,
            stop: STOP_SEQUENCES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// A text-completion model. Shared read-only across requests, so
/// implementations must be safe to call concurrently.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Short identifier for logs and status endpoints.
    fn name(&self) -> &str;

    /// Completes `prompt`, returning only the generated text.
    async fn complete(&self, prompt: &str, params: &CompletionParams)
    -> Result<String, ModelError>;
}
