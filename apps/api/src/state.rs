use std::sync::Arc;

use crate::catalog::Catalog;
use crate::chat::service::ChatSettings;
use crate::llm_client::InferenceClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    /// Pluggable inference backend. Default: `OllamaClient`.
    pub llm: Arc<dyn InferenceClient>,
    pub chat: ChatSettings,
}
