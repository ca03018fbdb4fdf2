//! Async services driving the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `conversation` runs the send/receive lifecycle against injected backend
//! and state handles; `health` runs the one-shot startup probe. Neither
//! depends on the view layer.

pub mod conversation;
pub mod health;
