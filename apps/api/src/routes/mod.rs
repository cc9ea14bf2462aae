pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/chat", post(handlers::handle_chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::catalog::Catalog;
    use crate::chat::models::ChatResponse;
    use crate::chat::service::tests::{settings, FakeInference};
    use crate::llm_client::InferenceError;

    fn app(llm: Arc<FakeInference>) -> Router {
        build_router(AppState {
            catalog: Catalog::builtin(),
            llm,
            chat: settings(),
        })
    }

    fn post_chat(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = app(Arc::new(FakeInference::replying("unused")))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_chat_returns_reply_and_matches() {
        let llm = Arc::new(FakeInference::replying("Adaptive Hover Morph를 추천해요."));
        let response = app(llm.clone())
            .oneshot(post_chat(
                r#"{"messages": [{"role": "user", "content": "hover button 추천"}], "locale": "ko"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let chat: ChatResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(chat.reply, "Adaptive Hover Morph를 추천해요.");

        // hover also appears in the Ecology Matrix tags
        let urls: Vec<&str> = chat.matches.iter().map(|m| m.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "http://localhost:3000/ko/motions/button/adaptive-hover-morph",
                "http://localhost:3000/ko/motions/interactions/ecology-matrix",
            ]
        );
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_chat_empty_messages_is_client_error() {
        let llm = Arc::new(FakeInference::replying("unused"));
        let response = app(llm.clone())
            .oneshot(post_chat(r#"{"messages": []}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["error"]["code"], "INVALID_REQUEST");
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_chat_upstream_failure_is_bad_gateway_without_reply() {
        let llm = Arc::new(FakeInference::failing(InferenceError::Api {
            status: 500,
            message: "ollama crashed".to_string(),
        }));
        let response = app(llm.clone())
            .oneshot(post_chat(
                r#"{"messages": [{"role": "user", "content": "hover"}]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
        assert!(body.get("reply").is_none());
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_chat_rejects_malformed_body() {
        let llm = Arc::new(FakeInference::replying("unused"));
        let response = app(llm.clone())
            .oneshot(post_chat(r#"{"messages": "not a list"}"#))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
        assert_eq!(llm.call_count(), 0);
    }
}
