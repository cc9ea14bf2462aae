//! LLM Client — the single point of entry for inference calls.
//!
//! The chat pipeline only sees the `InferenceClient` capability, so the concrete
//! backend (Ollama over HTTP, a test fake) can be swapped without touching
//! ranking or prompt composition.
//!
//! One attempt per call. Failures are returned to the caller, never retried here.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::chat::models::Message;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response body: {0}")]
    Malformed(String),
}

impl InferenceError {
    /// True when the service answered successfully but the reply could not be located.
    pub fn is_malformed(&self) -> bool {
        matches!(self, InferenceError::Malformed(_))
    }
}

/// Capability: turn an ordered conversation into a single reply string.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, InferenceError>;
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: Option<OllamaMessage>,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// Ollama `/api/chat` client with non-streaming requests.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    endpoint: String,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, InferenceError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
            model: model.into(),
            timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn classify(&self, err: reqwest::Error) -> InferenceError {
        if err.is_timeout() {
            InferenceError::Timeout(self.timeout)
        } else {
            InferenceError::Http(err)
        }
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, InferenceError> {
        let request_body = OllamaChatRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            warn!("Inference API returned {}: {}", status, body);
            // Ollama reports failures as {"error": "..."}
            let message = serde_json::from_str::<OllamaError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply = extract_reply(&body)?;
        debug!(
            "Inference call succeeded: model={}, reply_chars={}",
            self.model,
            reply.chars().count()
        );
        Ok(reply)
    }
}

/// Pulls `message.content` out of a successful response body.
fn extract_reply(body: &str) -> Result<String, InferenceError> {
    let parsed: OllamaChatResponse = serde_json::from_str(body)
        .map_err(|e| InferenceError::Malformed(format!("invalid JSON: {e}")))?;

    parsed
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| InferenceError::Malformed("missing message.content".to_string()))
}
