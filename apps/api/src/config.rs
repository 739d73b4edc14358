use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{GeminiConfig, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    /// Absent key is not fatal at startup: each generation answers 500 instead.
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub llm_timeout: Duration,
    /// History persistence is disabled when unset.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_timeout_secs = match optional_env("LLM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            supabase_url: require_env("SUPABASE_URL")?,
            supabase_anon_key: require_env("SUPABASE_ANON_KEY")?,
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            database_url: optional_env("DATABASE_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.gemini_api_key.clone(),
            api_base: self.gemini_api_base.clone(),
            model: self.gemini_model.clone(),
            timeout: self.llm_timeout,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and empty are treated alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
