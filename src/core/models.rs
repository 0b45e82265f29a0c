use serde::{Deserialize, Serialize};

/// Target summary length when the caller doesn't send `max_length`.
pub const DEFAULT_TARGET_WORDS: usize = 150;

/// Minimum trimmed length of incoming content, in characters.
pub const MIN_CONTENT_CHARS: usize = 10;

fn default_target_words() -> usize {
    DEFAULT_TARGET_WORDS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizationRequest {
    pub content: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Target summary length in words.
    #[serde(default = "default_target_words")]
    pub max_length: usize,
}

impl SummarizationRequest {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            title: None,
            url: None,
            max_length: DEFAULT_TARGET_WORDS,
        }
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

/// Where a summary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMethod {
    AiModel,
    Fallback,
    Minimal,
}

impl SummaryMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SummaryMethod::AiModel => "ai_model",
            SummaryMethod::Fallback => "fallback",
            SummaryMethod::Minimal => "minimal",
        }
    }
}

impl std::fmt::Display for SummaryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub word_count: usize,
    pub original_length: usize,
    pub method: SummaryMethod,
}

impl SummaryResult {
    /// Packages a summary, deriving `word_count` from the text itself.
    #[must_use]
    pub fn new(summary: String, original_length: usize, method: SummaryMethod) -> Self {
        let word_count = summary.split_whitespace().count();
        Self {
            summary,
            word_count,
            original_length,
            method,
        }
    }
}
