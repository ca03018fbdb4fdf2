//! Send/receive lifecycle for one chat turn.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ConversationPipeline` sequences the transitions on `ConversationState`
//! around one backend call: optimistic user append, pending, await, bot
//! append, recovery. The backend and the state store are injected so the
//! same pipeline drives the Leptos view and the headless tests.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become a bot apology and a console error; they never
//! propagate. Recovery (`finish_send`) runs from a drop guard, so pending
//! is cleared even if the send future is dropped or unwinds mid-flight.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::ChatBackend;
use crate::state::conversation::{ConversationState, ReplyKind, SendRejected};
use crate::util::clock;

/// Mutable access to the single `ConversationState`.
pub trait ConversationStore {
    /// Run `f` against the state. Returns `None` once the state is gone
    /// (widget unmounted) or cannot be borrowed.
    fn update_state<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R>;
}

impl ConversationStore for RwSignal<ConversationState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl ConversationStore for Rc<RefCell<ConversationState>> {
    fn update_state<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R> {
        let mut state = self.try_borrow_mut().ok()?;
        Some(f(&mut state))
    }
}

/// Result of one [`ConversationPipeline::send_message`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing was appended and no request issued.
    Rejected(SendRejected),
    /// The request settled and a bot message was appended.
    Settled(ReplyKind),
    /// The state went away before the turn could be recorded.
    Detached,
}

#[derive(Clone)]
pub struct ConversationPipeline<B, S> {
    backend: B,
    store: S,
    clock: fn() -> f64,
}

impl<B: ChatBackend, S: ConversationStore> ConversationPipeline<B, S> {
    pub fn new(backend: B, store: S) -> Self {
        Self { backend, store, clock: clock::now_ms }
    }

    /// Replace the timestamp source.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> f64) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Send one user message and record the reply.
    pub async fn send_message(&self, raw: &str) -> SendOutcome {
        let payload = match self.store.update_state(|s| s.begin_send(raw, (self.clock)())) {
            Some(Ok(payload)) => payload,
            Some(Err(rejected)) => return SendOutcome::Rejected(rejected),
            None => return SendOutcome::Detached,
        };
        let _recovery = RecoveryGuard { store: &self.store };

        let result = self.backend.send_chat(&payload).await;
        if let Err(e) = &result {
            leptos::logging::error!("chat request failed: {e}");
        }

        let timestamp = (self.clock)();
        self.store
            .update_state(|s| s.apply_reply(result, timestamp))
            .map_or(SendOutcome::Detached, SendOutcome::Settled)
    }
}

/// Runs `finish_send` exactly once when the send scope ends, however it ends.
struct RecoveryGuard<'a, S: ConversationStore> {
    store: &'a S,
}

impl<S: ConversationStore> Drop for RecoveryGuard<'_, S> {
    fn drop(&mut self) {
        let _ = self.store.update_state(ConversationState::finish_send);
    }
}
