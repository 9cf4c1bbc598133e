// src/routes/chat.rs
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::error::AppError;
use crate::message::{ChatRequest, ChatResponse};
use crate::services::prompt::build_prompt;
use crate::state::SharedState;

/// The single chat endpoint: validate, build the prompt, forward it
/// upstream once, relay the reply. Stateless; every failure becomes a JSON
/// error body via `AppError`, including body deserialization rejections.
pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;
    let message = payload.message.ok_or(AppError::MissingMessage)?;

    let prompt = build_prompt(&state.codebase, &message);

    let response = state.openrouter.complete(&prompt).await.inspect_err(|err| {
        tracing::error!(%err, "chat completion failed");
    })?;

    Ok(Json(ChatResponse { response }))
}
