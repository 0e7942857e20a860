use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    NotFound,
    Storage,
    Internal,
}

/// Typed failure shared across the studio crates. Service layers attach
/// context with `anyhow`; this is the currency for errors callers are
/// expected to branch on.
#[derive(Debug, Clone, Error)]
#[error("{code:?}: {message}")]
pub struct StudioException {
    pub code: ErrorCode,
    pub message: String,
}

impl StudioException {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Validation, message)
    }
}
