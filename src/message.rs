// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Error body shared by every failure path. `details` is unstructured
/// diagnostic data: the raw upstream JSON on a shape failure, an error
/// string otherwise.
#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: serde_json::Value,
}
