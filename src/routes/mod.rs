// src/routes/mod.rs
pub mod chat;

use std::path::Path;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;
use chat::chat_handler;

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index_handler(State(state): State<SharedState>) -> Result<Html<String>, StatusCode> {
    let index = Path::new(&state.config.static_dir).join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Ok(Html(html)),
        Err(err) => {
            tracing::error!(path = %index.display(), %err, "failed to read index page");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
