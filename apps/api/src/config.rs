use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub ollama_endpoint: String,
    pub ollama_model: String,
    pub inference_timeout: Duration,
    /// Base for absolute catalog links, without a trailing slash.
    pub site_base_url: String,
    /// Optional JSON catalog replacing the built-in demos.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = var("PORT", "8000")
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let timeout_secs = var("INFERENCE_TIMEOUT_SECS", "60")
            .parse::<u64>()
            .context("INFERENCE_TIMEOUT_SECS must be a whole number of seconds")?;
        if timeout_secs == 0 {
            bail!("INFERENCE_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            port,
            rust_log: var("RUST_LOG", "info"),
            ollama_endpoint: var("OLLAMA_ENDPOINT", "http://localhost:11434/api/chat"),
            ollama_model: var("OLLAMA_MODEL", "qwen2.5"),
            inference_timeout: Duration::from_secs(timeout_secs),
            site_base_url: var("SITE_BASE_URL", "http://localhost:3000")
                .trim_end_matches('/')
                .to_string(),
            catalog_path: lookup("CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.ollama_endpoint, "http://localhost:11434/api/chat");
        assert_eq!(config.ollama_model, "qwen2.5");
        assert_eq!(config.inference_timeout, Duration::from_secs(60));
        assert_eq!(config.site_base_url, "http://localhost:3000");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("OLLAMA_MODEL", "llama3"),
            ("INFERENCE_TIMEOUT_SECS", "5"),
            ("SITE_BASE_URL", "https://motion.example.com/"),
            ("CATALOG_PATH", "/etc/motion/catalog.json"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.ollama_model, "llama3");
        assert_eq!(config.inference_timeout, Duration::from_secs(5));
        assert_eq!(config.site_base_url, "https://motion.example.com");
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/motion/catalog.json"))
        );
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(config_from(&[("INFERENCE_TIMEOUT_SECS", "0")]).is_err());
    }
}
