use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::InferenceError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Callers can tell client mistakes (400) from upstream failures (502), but the
/// two upstream variants look identical on the wire and differ only in the logs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Inference service unavailable: {0}")]
    UpstreamUnavailable(#[source] InferenceError),

    #[error("Inference service returned a malformed reply: {0}")]
    UpstreamMalformed(#[source] InferenceError),
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        if err.is_malformed() {
            AppError::UpstreamMalformed(err)
        } else {
            AppError::UpstreamUnavailable(err)
        }
    }
}

const UPSTREAM_MESSAGE: &str = "The inference service could not produce a reply";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            AppError::UpstreamUnavailable(e) => {
                tracing::error!("Inference service unavailable: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    UPSTREAM_MESSAGE.to_string(),
                )
            }
            AppError::UpstreamMalformed(e) => {
                tracing::error!("Inference service reply malformed: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    UPSTREAM_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
