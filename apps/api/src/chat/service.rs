//! Request orchestration: validate → rank → compose → infer → project matches.
//!
//! No shared mutable state. The catalog is read-only and the inference client
//! is the only step that suspends.

use tracing::{debug, info};

use crate::catalog::{ranker::rank, Catalog};
use crate::chat::composer::system_prompt;
use crate::chat::models::{ChatRequest, ChatResponse, MatchResult, Message};
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::InferenceClient;

/// Link-building settings shared by every chat request.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub site_base_url: String,
}

impl ChatSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            site_base_url: config.site_base_url.clone(),
        }
    }
}

/// Runs one chat turn against the catalog and the inference service.
///
/// The last message's content is the ranking query whatever its role, and links
/// use the request's locale as given (trimmed).
/// An empty conversation fails before ranking and before any outbound call.
pub async fn run_chat(
    catalog: &Catalog,
    llm: &dyn InferenceClient,
    settings: &ChatSettings,
    request: ChatRequest,
) -> Result<ChatResponse, AppError> {
    let Some(last) = request.messages.last() else {
        return Err(AppError::InvalidRequest(
            "messages cannot be empty".to_string(),
        ));
    };

    let limit = usize::try_from(request.max_matches).map_err(|_| {
        AppError::InvalidRequest(format!(
            "max_matches must be >= 0, got {}",
            request.max_matches
        ))
    })?;

    let locale = request.locale.trim();
    let matches = rank(&last.content, catalog.items(), limit);
    debug!(
        "Ranked {} match(es) for locale {}: {:?}",
        matches.len(),
        locale,
        matches.iter().map(|m| m.slug.as_str()).collect::<Vec<_>>()
    );

    let mut outbound = Vec::with_capacity(request.messages.len() + 1);
    outbound.push(Message::system(system_prompt(
        &matches,
        locale,
        &settings.site_base_url,
    )));
    outbound.extend(request.messages.iter().cloned());

    let reply = llm.complete(&outbound).await?;
    info!(
        "Chat completed: {} message(s) in, {} match(es) out",
        request.messages.len(),
        matches.len()
    );

    let matches = matches
        .into_iter()
        .map(|item| MatchResult::project(item, &settings.site_base_url, locale))
        .collect();

    Ok(ChatResponse { reply, matches })
}
