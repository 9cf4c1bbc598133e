// src/services/mod.rs
pub mod openrouter;
pub mod prompt;
