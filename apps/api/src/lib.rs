//! Motion Lab chat bridge: ranks the motion demo catalog against the latest
//! utterance, injects the matches as a system prompt, and forwards the
//! conversation to an Ollama inference service.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod routes;
pub mod state;

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;

/// Loads the catalog named by `CATALOG_PATH`, or the built-in demos.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => {
            let catalog = Catalog::from_json_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
            info!("Loaded {} catalog item(s) from {}", catalog.len(), path.display());
            Ok(catalog)
        }
        None => {
            let catalog = Catalog::builtin();
            info!("Using built-in catalog ({} item(s))", catalog.len());
            Ok(catalog)
        }
    }
}
