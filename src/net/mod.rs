//! Networking for the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the request/response schema of the chat and health
//! endpoints, `api` wraps them behind the `ChatBackend` trait.

pub mod api;
pub mod types;
