//! HTTP access to the chat and health endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: calls fail with [`ApiError::Unavailable`], since these
//! endpoints are only reachable from the hosting page.
//!
//! ERROR HANDLING
//! ==============
//! The chat endpoint answers application errors with a non-2xx status and a
//! `{success:false,error}` body, so the body is parsed whatever the status.
//! Only a body that is not a valid payload becomes an [`ApiError`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{ApiError, ChatResponse, HealthResponse};
use crate::config::WidgetConfig;

/// Backend seam for the conversation pipeline and the health probe.
/// Enables mocking in tests.
#[async_trait(?Send)]
pub trait ChatBackend {
    /// Post one user message to the chat endpoint.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request cannot complete or the body is
    /// not a chat payload.
    async fn send_chat(&self, message: &str) -> Result<ChatResponse, ApiError>;

    /// Fetch the backend health report.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request cannot complete or the body is
    /// not a health payload.
    async fn fetch_health(&self) -> Result<HealthResponse, ApiError>;
}

/// [`ChatBackend`] over HTTP, pointed at the configured endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    chat_endpoint: String,
    health_endpoint: String,
}

impl HttpBackend {
    pub fn new(config: &WidgetConfig) -> Self {
        Self { chat_endpoint: config.chat_endpoint.clone(), health_endpoint: config.health_endpoint.clone() }
    }

    pub fn chat_endpoint(&self) -> &str {
        &self.chat_endpoint
    }

    pub fn health_endpoint(&self) -> &str {
        &self.health_endpoint
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpBackend {
    async fn send_chat(&self, message: &str) -> Result<ChatResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use super::types::ChatRequest;

            let resp = gloo_net::http::Request::post(&self.chat_endpoint)
                .json(&ChatRequest { message })
                .map_err(|e| ApiError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
            parse_chat_body(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_health(&self) -> Result<HealthResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.health_endpoint)
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
            parse_health_body(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn parse_chat_body(status: u16, body: &str) -> Result<ChatResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse { status, message: e.to_string() })
}

#[cfg(any(test, feature = "csr"))]
fn parse_health_body(status: u16, body: &str) -> Result<HealthResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse { status, message: e.to_string() })
}
