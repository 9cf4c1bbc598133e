// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::openrouter::OpenRouterClient;

pub type SharedState = Arc<AppState>;

/// Everything a request handler needs, built once at startup and read-only
/// afterwards.
pub struct AppState {
    pub config: Config,
    pub codebase: String,
    pub openrouter: OpenRouterClient,
}

impl AppState {
    pub fn new(config: Config, codebase: String, openrouter: OpenRouterClient) -> Self {
        Self {
            config,
            codebase,
            openrouter,
        }
    }
}
