//! Axum route handlers for the Chat API.

use axum::{extract::State, Json};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::chat::models::{ChatRequest, ChatResponse};
use crate::chat::service::run_chat;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /chat
///
/// Ranks the catalog against the latest message, injects the catalog block as the
/// leading system message, and returns the model reply with the linked matches.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let request_id = Uuid::new_v4();

    let response = run_chat(&state.catalog, state.llm.as_ref(), &state.chat, request)
        .instrument(info_span!("chat", %request_id))
        .await?;

    Ok(Json(response))
}
