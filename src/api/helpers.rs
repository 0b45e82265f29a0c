//! Response builders shared by the HTTP handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use crate::errors::SummarizerError;

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Response {
    let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": message }))).into_response()
}

impl IntoResponse for SummarizerError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code >= 500 {
            error!("Summarization error: {}", self);
        }
        err_response(status_code, &self.to_string())
    }
}
