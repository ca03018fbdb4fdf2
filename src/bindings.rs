//! Static table of widget input bindings.
//!
//! DESIGN
//! ======
//! Every input the widget reacts to is a [`Trigger`]; every handler is an
//! [`Action`]. The view only classifies raw DOM facts into triggers and
//! looks the action up in [`BINDINGS`], so handlers can be exercised in
//! tests without synthesizing browser events.

#[cfg(test)]
#[path = "bindings_test.rs"]
mod bindings_test;

use crate::state::conversation::Document;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Floating launcher button.
    LauncherClick,
    /// Close button in the widget header.
    HeaderCloseClick,
    SendClick,
    /// Enter without Shift in the message field.
    InputEnter,
    SuggestionClick,
    /// "View Sources" on a bot message.
    ViewSourcesClick,
    ModalCloseClick,
    /// Click whose target is the modal's outer surface.
    ModalBackdropClick,
    EscapeKey,
    /// Ctrl+K / Cmd+K anywhere on the page.
    FocusShortcut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleWidget,
    CloseWidget,
    SendMessage,
    FillInput,
    ShowSources,
    CloseModal,
    /// Close the modal if open, else the widget if open.
    Escape,
    FocusInput,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub trigger: Trigger,
    pub action: Action,
}

pub const BINDINGS: &[Binding] = &[
    Binding { trigger: Trigger::LauncherClick, action: Action::ToggleWidget },
    Binding { trigger: Trigger::HeaderCloseClick, action: Action::CloseWidget },
    Binding { trigger: Trigger::SendClick, action: Action::SendMessage },
    Binding { trigger: Trigger::InputEnter, action: Action::SendMessage },
    Binding { trigger: Trigger::SuggestionClick, action: Action::FillInput },
    Binding { trigger: Trigger::ViewSourcesClick, action: Action::ShowSources },
    Binding { trigger: Trigger::ModalCloseClick, action: Action::CloseModal },
    Binding { trigger: Trigger::ModalBackdropClick, action: Action::CloseModal },
    Binding { trigger: Trigger::EscapeKey, action: Action::Escape },
    Binding { trigger: Trigger::FocusShortcut, action: Action::FocusInput },
];

/// Look up the action bound to a trigger.
pub fn action_for(trigger: Trigger) -> Option<Action> {
    BINDINGS.iter().find(|b| b.trigger == trigger).map(|b| b.action)
}

/// Data carried by triggers whose action needs it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Payload {
    #[default]
    None,
    /// Suggestion query to place in the message field.
    Query(String),
    /// Documents to show in the source modal.
    Documents(Vec<Document>),
}

/// Keyboard facts extracted from a DOM `KeyboardEvent`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), ..Self::default() }
    }

    pub fn from_event(ev: &leptos::ev::KeyboardEvent) -> Self {
        Self { key: ev.key(), shift: ev.shift_key(), ctrl: ev.ctrl_key(), meta: ev.meta_key() }
    }
}

/// Page-level keys: Escape and the focus shortcut.
pub fn classify_global_key(press: &KeyPress) -> Option<Trigger> {
    if press.key == "Escape" {
        return Some(Trigger::EscapeKey);
    }
    if (press.ctrl || press.meta) && press.key.eq_ignore_ascii_case("k") {
        return Some(Trigger::FocusShortcut);
    }
    None
}

/// Keys inside the message field. Shift+Enter inserts a newline instead.
pub fn classify_input_key(press: &KeyPress) -> Option<Trigger> {
    (press.key == "Enter" && !press.shift).then_some(Trigger::InputEnter)
}

/// Clicks on the modal count only when they land on the outer surface.
pub fn backdrop_trigger(target_is_surface: bool) -> Option<Trigger> {
    target_is_surface.then_some(Trigger::ModalBackdropClick)
}
