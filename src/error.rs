// src/error.rs
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::message::ErrorBody;
use crate::services::openrouter::UpstreamError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("request body must contain a string \"message\" field")]
    MissingMessage,
    /// Body was not valid JSON or did not match the request shape. Wrapped
    /// so the caller still gets the `{error, details}` contract instead of
    /// axum's plain-text rejection.
    #[error("invalid request body")]
    InvalidBody(#[from] JsonRejection),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::MissingMessage => (
                StatusCode::BAD_REQUEST,
                "Missing \"message\" field".to_string(),
                serde_json::Value::Null,
            ),
            AppError::InvalidBody(rejection) => (
                StatusCode::BAD_REQUEST,
                "Invalid request body".to_string(),
                serde_json::Value::String(rejection.body_text()),
            ),
            AppError::Upstream(UpstreamError::Shape(raw)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Model response had no choices".to_string(),
                raw,
            ),
            AppError::Upstream(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error connecting to OpenRouter".to_string(),
                serde_json::Value::String(err.to_string()),
            ),
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}
