use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
///
/// Everything has a default: the service is meant to come up with zero
/// configuration on a laptop next to a local Ollama instance.
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_url: String,
    pub ollama_model: String,
    /// "log" (default) or "formspree".
    pub contact_transport: String,
    /// Required only when `contact_transport` is "formspree".
    pub formspree_endpoint: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ollama_url: env_or("OLLAMA_URL", DEFAULT_BASE_URL),
            ollama_model: env_or("OLLAMA_MODEL", DEFAULT_MODEL),
            contact_transport: env_or("CONTACT_TRANSPORT", "log"),
            formspree_endpoint: std::env::var("FORMSPREE_ENDPOINT").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
