//! Wire DTOs for the chat and health endpoints.
//!
//! DESIGN
//! ======
//! Optional fields mirror what the backend may omit; interpretation
//! (defaults, fallbacks) happens in `state::conversation`, not here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST` to the chat endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Body returned by the chat endpoint, on success and on application error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: Option<String>,
    pub context_docs: Option<Vec<ContextDoc>>,
    /// `"english"` or `"marathi"`; absent means English.
    pub language: Option<String>,
    pub error: Option<String>,
}

/// One supporting document attached to a chat response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ContextDoc {
    pub content: Option<String>,
    pub text: Option<String>,
}

/// Body returned by the health endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Transport-level failures. Every variant is a "could not complete the
/// request" outcome; application errors travel inside [`ChatResponse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built, sent, or read.
    #[error("request failed: {0}")]
    Request(String),

    /// The response body was not the expected JSON shape.
    #[error("response parse failed (status {status}): {message}")]
    Parse { status: u16, message: String },

    /// No HTTP transport exists in this build (non-browser).
    #[error("HTTP transport not available outside the browser")]
    Unavailable,
}
