//! llama.cpp server client
//!
//! Talks to the `/completion` endpoint of a llama.cpp-compatible server and
//! bootstraps the process-wide model handle at startup.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
#[cfg(feature = "debug-logs")]
use tracing::debug;
use tracing::{info, warn};

use super::model::{CompletionModel, CompletionParams};
use crate::core::config::AppConfig;
use crate::errors::ModelError;

const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Completion model served by a llama.cpp HTTP server.
pub struct LlamaServerModel {
    base_url: String,
    client: Client,
}

impl LlamaServerModel {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ModelError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks that the server is up and has finished loading its model.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or not ready.
    pub async fn probe(&self) -> Result<(), ModelError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(HEALTH_PROBE_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl CompletionModel for LlamaServerModel {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn complete(
        &self,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<String, ModelError> {
        #[cfg(feature = "debug-logs")]
        debug!("Using completion prompt:\n{}", prompt);

        let request_body = json!({
            "prompt": prompt,
            "n_predict": params.max_tokens,
            "temperature": params.temperature,
            "top_p": params.top_p,
            "stop": params.stop,
            "stream": false,
        });

        let response = self
            .client
            .post(format!("{}/completion", self.base_url))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| ModelError::MalformedResponse(e.to_string()))?;

        extract_completion_text(&response_json)
            .ok_or_else(|| ModelError::MalformedResponse("No text in response".to_string()))
    }
}

/// Pulls the generated text out of a completion response.
///
/// llama.cpp's native endpoint answers with `content`; OpenAI-compatible
/// servers put it under `choices[0].text`.
fn extract_completion_text(response: &Value) -> Option<String> {
    response
        .get("content")
        .and_then(Value::as_str)
        .or_else(|| {
            response
                .get("choices")
                .and_then(Value::as_array)
                .and_then(|choices| choices.first())
                .and_then(|choice| choice.get("text"))
                .and_then(Value::as_str)
        })
        .map(ToString::to_string)
}

/// Creates the process-wide model handle, best-effort.
///
/// A missing URL, an unbuildable client or a server that fails its health
/// probe all leave the service in fallback-only mode; none is an error.
pub async fn load_model(config: &AppConfig) -> Option<Arc<dyn CompletionModel>> {
    let Some(url) = config.model_url.as_deref() else {
        warn!("No model configured (set SUMMARIZER_MODEL_URL), using fallback summarization only");
        return None;
    };

    info!("Connecting to model server at: {}", url);

    let model = match LlamaServerModel::new(url, Duration::from_secs(config.model_timeout_secs)) {
        Ok(model) => model,
        Err(e) => {
            warn!("Error creating model client: {}", e);
            return None;
        }
    };

    if let Err(e) = model.probe().await {
        warn!("Model server not available: {}, using fallback summarization only", e);
        return None;
    }

    info!("Model loaded successfully!");
    Some(Arc::new(model))
}
