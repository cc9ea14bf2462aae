use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use motion_chat_api::chat::service::ChatSettings;
use motion_chat_api::config::Config;
use motion_chat_api::llm_client::OllamaClient;
use motion_chat_api::routes::build_router;
use motion_chat_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "motion_chat_api={0},tower_http={0}",
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Motion Chat API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = motion_chat_api::load_catalog(&config)?;

    let llm = OllamaClient::new(
        config.ollama_endpoint.clone(),
        config.ollama_model.clone(),
        config.inference_timeout,
    )?;
    info!(
        "Inference client initialized (endpoint: {}, model: {}, timeout: {:?})",
        config.ollama_endpoint,
        llm.model(),
        config.inference_timeout
    );

    let state = AppState {
        catalog,
        llm: Arc::new(llm),
        chat: ChatSettings::from_config(&config),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
