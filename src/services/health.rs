//! One-shot backend availability probe run at widget start.
//!
//! Purely observational: the result is logged and returned, never shown to
//! the user, never retried, and never touches conversation state.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use crate::net::api::ChatBackend;
use crate::net::types::{ApiError, HealthResponse};

/// The only status value treated as healthy.
pub const HEALTHY_STATUS: &str = "healthy";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HealthStatus {
    Ready,
    /// Reachable, but reporting something other than healthy.
    Degraded { status: String },
    /// The request failed or the body was not a health report.
    Unreachable { reason: String },
}

impl HealthStatus {
    pub fn from_result(result: Result<HealthResponse, ApiError>) -> Self {
        match result {
            Ok(resp) if resp.status == HEALTHY_STATUS => Self::Ready,
            Ok(resp) => Self::Degraded { status: resp.status },
            Err(e) => Self::Unreachable { reason: e.to_string() },
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Query the health endpoint once and log the outcome.
pub async fn probe<B: ChatBackend + ?Sized>(backend: &B) -> HealthStatus {
    let status = HealthStatus::from_result(backend.fetch_health().await);
    match &status {
        HealthStatus::Ready => leptos::logging::log!("chat backend is ready"),
        HealthStatus::Degraded { status } => leptos::logging::warn!("chat backend unavailable: status {status}"),
        HealthStatus::Unreachable { reason } => leptos::logging::error!("chat backend health check failed: {reason}"),
    }
    status
}
