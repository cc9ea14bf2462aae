//! One-shot command-line client: runs the full chat pipeline for a single prompt.
//!
//! Usage: `ask [prompt words...]`

use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use motion_chat_api::chat::models::{ChatRequest, ChatResponse, Message, DEFAULT_LOCALE, DEFAULT_MAX_MATCHES};
use motion_chat_api::chat::service::{run_chat, ChatSettings};
use motion_chat_api::config::Config;
use motion_chat_api::llm_client::OllamaClient;

const SAMPLE_PROMPT: &str = "오키드 테마 버튼 인터랙션 추천해줘";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let prompt = if args.is_empty() {
        SAMPLE_PROMPT.to_string()
    } else {
        args.join(" ")
    };

    match ask(prompt).await {
        Ok(response) => {
            println!("Assistant:\n{}", response.reply);
            if !response.matches.is_empty() {
                println!("\nMatches:");
                for m in &response.matches {
                    println!("- {} ({})", m.item.title, m.url);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[ERROR] {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn ask(prompt: String) -> Result<ChatResponse> {
    let config = Config::from_env()?;
    let catalog = motion_chat_api::load_catalog(&config)?;
    let llm = OllamaClient::new(
        config.ollama_endpoint.clone(),
        config.ollama_model.clone(),
        config.inference_timeout,
    )?;

    let request = ChatRequest {
        messages: vec![Message::user(prompt)],
        locale: DEFAULT_LOCALE.to_string(),
        max_matches: DEFAULT_MAX_MATCHES,
    };

    let response = run_chat(&catalog, &llm, &ChatSettings::from_config(&config), request).await?;
    Ok(response)
}
