use thiserror::Error;

use crate::core::models::MIN_CONTENT_CHARS;

/// Errors that cross the summarization pipeline boundary.
///
/// Model and inference failures never show up here: the orchestrator absorbs
/// them and degrades to the heuristic summary.
#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error(
        "Content too short or empty (minimum {} characters required)",
        MIN_CONTENT_CHARS
    )]
    ContentTooShort,

    #[error("Invalid max_length: {0} (must be a positive word count)")]
    InvalidTargetLength(usize),

    #[error("Summarization failed: {0}")]
    Internal(String),
}

impl SummarizerError {
    /// HTTP status code the API layer answers with for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            SummarizerError::ContentTooShort | SummarizerError::InvalidTargetLength(_) => 400,
            SummarizerError::Internal(_) => 500,
        }
    }
}

impl From<tokio::task::JoinError> for SummarizerError {
    fn from(error: tokio::task::JoinError) -> Self {
        SummarizerError::Internal(error.to_string())
    }
}

/// Failures talking to the inference engine.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to reach inference server: {0}")]
    Http(String),

    #[error("Inference server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed inference response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ModelError {
    fn from(error: reqwest::Error) -> Self {
        ModelError::Http(error.to_string())
    }
}

/// Why a model completion was not accepted as a summary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("Model returned insufficient summary ({0} characters)")]
    InsufficientContent(usize),

    #[error("Model output looks like a continuation of the input, not a summary")]
    LooksLikeContinuation,
}

/// Outcome of a failed model attempt. Both variants send the request down
/// the heuristic path.
#[derive(Debug, Error)]
pub enum ModelFailure {
    #[error("Model inference failed: {0}")]
    Inference(#[from] ModelError),

    #[error("Model output rejected: {0}")]
    Rejected(#[from] RejectReason),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name}: invalid value {value:?}")]
    InvalidValue { name: &'static str, value: String },
}
