//! HTTP router and handlers.
//!
//! This module handles:
//! - Service status (`GET /`, `GET /health`)
//! - Summarization requests (`POST /summarize`)
//! - CORS for the browser extension and local website

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{Method, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Instrument, error, info_span, warn};
use uuid::Uuid;

use super::helpers::err_response;
use crate::core::models::{SummarizationRequest, SummaryResult};
use crate::errors::SummarizerError;
use crate::features::Summarizer;

pub const SERVICE_NAME: &str = "Local Summarizer";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const ENDPOINTS: [&str; 3] = ["/", "/health", "/summarize"];

#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    #[must_use]
    pub fn new(summarizer: Summarizer) -> Self {
        Self {
            summarizer: Arc::new(summarizer),
        }
    }
}

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/summarize", post(summarize_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Service banner
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    let model_status = if state.summarizer.has_model() {
        "loaded"
    } else {
        "not loaded"
    };

    Json(json!({
        "service": SERVICE_NAME,
        "status": "running",
        "model": model_status,
        "version": SERVICE_VERSION,
    }))
}

/// Detailed health check
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "model_loaded": state.summarizer.has_model(),
        "endpoints": ENDPOINTS,
    }))
}

/// Summarize content.
///
/// The pipeline runs in its own task so a panic inside it turns into a 500
/// response rather than a dropped connection.
///
/// # Errors
///
/// Returns 400 for content that is too short or an invalid `max_length`,
/// and 500 if the pipeline task fails unexpectedly. Bodies that do not
/// parse keep axum's status code but get a JSON `{"error": ...}` body.
pub async fn summarize_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummarizationRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected summarize body: {}", rejection.body_text());
            return err_response(rejection.status().as_u16(), &rejection.body_text());
        }
    };

    match run_summary(&state, request).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn run_summary(
    state: &AppState,
    request: SummarizationRequest,
) -> Result<SummaryResult, SummarizerError> {
    let summarizer = Arc::clone(&state.summarizer);
    let span = info_span!("summarize", request_id = %Uuid::new_v4());

    let result = tokio::spawn(async move { summarizer.summarize(&request).await }.instrument(span))
        .await
        .map_err(|e| {
            error!("Summarization task failed: {}", e);
            SummarizerError::from(e)
        })??;

    Ok(result)
}
