// src/config.rs
use std::env;
use std::time::Duration;

pub const UPSTREAM_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const MODEL: &str = "google/gemini-2.0-flash-thinking-exp:free";
pub const REFERER: &str = "https://mfpsdocs.onrender.com";
pub const USER_AGENT: &str = "MFPS-2.0/1.0.0";
pub const APP_TITLE: &str = "MFPS 2.0 Architecture Assistant";
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(60);

/// Process-wide configuration, read once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub codebase_file: String,
    pub static_dir: String,
    pub bind_addr: String,
}

impl Config {
    /// Build the configuration from the environment. A missing API key is not
    /// an error here; the upstream rejects unauthenticated calls on its own.
    pub fn from_env() -> Self {
        let api_key = env::var("OPENROUTER_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("OPENROUTER_API_KEY is not set, upstream calls will be rejected");
        }

        Self {
            api_key,
            model: MODEL.to_string(),
            codebase_file: env::var("CODEBASE_FILE").unwrap_or_else(|_| "codebase.txt".into()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into()),
        }
    }
}
