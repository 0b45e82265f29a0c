use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use local_summarizer::ai::model::{CompletionModel, CompletionParams};
use local_summarizer::ai::{LlamaServerModel, load_model};
use local_summarizer::core::config::AppConfig;
use local_summarizer::core::models::{SummarizationRequest, SummaryMethod};
use local_summarizer::errors::ModelError;
use local_summarizer::features::Summarizer;

const ARTICLE: &str = "The city council met on Tuesday to discuss the new budget proposal. \
                       The proposal includes additional funding for parks and public libraries. \
                       After a long debate the council postponed the final vote until next month.";

#[derive(Clone)]
struct FakeServer {
    reply: Value,
    status: StatusCode,
    last_request: Arc<Mutex<Option<Value>>>,
}

async fn completion(
    State(server): State<FakeServer>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    *server.last_request.lock().unwrap() = Some(body);
    (server.status, Json(server.reply.clone()))
}

async fn health(State(server): State<FakeServer>) -> StatusCode {
    if server.status.is_success() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Starts a fake llama.cpp server on an ephemeral port and returns its URL.
async fn spawn_server(status: StatusCode, reply: Value) -> (String, Arc<Mutex<Option<Value>>>) {
    let last_request = Arc::new(Mutex::new(None));
    let state = FakeServer {
        reply,
        status,
        last_request: last_request.clone(),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/completion", post(completion))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), last_request)
}

/// A URL on which nothing is listening.
async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn config_for(url: Option<String>) -> AppConfig {
    AppConfig {
        model_url: url,
        model_timeout_secs: 5,
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn test_complete_sends_sampling_params_and_reads_content() {
    let (url, last_request) = spawn_server(
        StatusCode::OK,
        json!({ "content": "Council delays the budget vote.", "stop": true }),
    )
    .await;
    let model = LlamaServerModel::new(url, Duration::from_secs(5)).unwrap();

    let text = model
        .complete("Summarize this.", &CompletionParams::for_summary(100))
        .await
        .unwrap();
    assert_eq!(text, "Council delays the budget vote.");

    let sent = last_request.lock().unwrap().clone().unwrap();
    assert_eq!(sent["prompt"], "Summarize this.");
    assert_eq!(sent["n_predict"], 120);
    assert!((sent["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
    assert!((sent["top_p"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert_eq!(sent["stop"][2], "### Response:");
    assert_eq!(sent["stream"], false);
}

#[tokio::test]
async fn test_complete_reports_error_status() {
    let (url, _) = spawn_server(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "out of memory" }),
    )
    .await;
    let model = LlamaServerModel::new(url, Duration::from_secs(5)).unwrap();

    let err = model
        .complete("prompt", &CompletionParams::for_summary(10))
        .await
        .unwrap_err();

    match err {
        ModelError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("out of memory"));
        }
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[tokio::test]
async fn test_complete_rejects_response_without_text() {
    let (url, _) = spawn_server(StatusCode::OK, json!({ "tokens": [1, 2, 3] })).await;
    let model = LlamaServerModel::new(url, Duration::from_secs(5)).unwrap();

    let err = model
        .complete("prompt", &CompletionParams::for_summary(10))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_complete_unreachable_server_is_http_error() {
    let model = LlamaServerModel::new(closed_url().await, Duration::from_secs(5)).unwrap();

    let err = model
        .complete("prompt", &CompletionParams::for_summary(10))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::Http(_)));
}

#[tokio::test]
async fn test_load_model_without_url_is_none() {
    assert!(load_model(&config_for(None)).await.is_none());
}

#[tokio::test]
async fn test_load_model_with_unreachable_server_is_none() {
    assert!(load_model(&config_for(Some(closed_url().await))).await.is_none());
}

#[tokio::test]
async fn test_load_model_with_unhealthy_server_is_none() {
    let (url, _) = spawn_server(StatusCode::SERVICE_UNAVAILABLE, json!({})).await;
    assert!(load_model(&config_for(Some(url))).await.is_none());
}

#[tokio::test]
async fn test_load_model_with_healthy_server() {
    let (url, _) = spawn_server(StatusCode::OK, json!({ "content": "" })).await;
    let model = load_model(&config_for(Some(url.clone()))).await.unwrap();
    assert_eq!(model.name(), url);
}

#[tokio::test]
async fn test_summarizer_end_to_end_with_server() {
    let (url, last_request) = spawn_server(
        StatusCode::OK,
        json!({ "content": " Council delays budget vote despite support for parks.\n" }),
    )
    .await;
    let summarizer = Summarizer::new(load_model(&config_for(Some(url))).await);

    let result = summarizer
        .summarize(&SummarizationRequest::new(ARTICLE))
        .await
        .unwrap();

    assert_eq!(result.method, SummaryMethod::AiModel);
    assert_eq!(
        result.summary,
        "Council delays budget vote despite support for parks."
    );

    let sent = last_request.lock().unwrap().clone().unwrap();
    assert!(
        sent["prompt"]
            .as_str()
            .unwrap()
            .ends_with("### Response:\nThe main points are: ")
    );
    assert_eq!(sent["n_predict"], 170);
}
