//! Leptos view components for the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read state from context (`RwSignal<WidgetState>`,
//! `RwSignal<ConversationState>`) and report input through the shared
//! dispatch callback built in `app`.

pub mod chat_window;
pub mod formatted_text;
pub mod message_bubble;
pub mod source_modal;
