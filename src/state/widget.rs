//! Widget and modal visibility.
//!
//! DESIGN
//! ======
//! Widget visibility and modal visibility are independent axes; only the
//! shared Escape key orders them (modal first, then widget). Focus requests
//! are a sequence counter the view observes, as with the other `*_seq`
//! fields in this crate.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use super::conversation::Document;
use super::source_modal::SourceModalState;
use crate::bindings::Action;

/// What an Escape press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeEffect {
    ClosedModal,
    ClosedWidget,
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    pub is_open: bool,
    pub modal: SourceModalState,
    /// Bumped whenever input focus should move to the message field.
    pub focus_seq: u64,
}

impl WidgetState {
    /// Show the widget and move focus to the message field.
    pub fn open(&mut self) {
        self.is_open = true;
        self.focus_seq += 1;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_visible()
    }

    pub fn open_document_modal(&mut self, docs: &[Document]) {
        self.modal.show(docs);
    }

    pub fn close_document_modal(&mut self) {
        self.modal.hide();
    }

    pub fn focus_input(&mut self) {
        self.focus_seq += 1;
    }

    pub fn handle_escape(&mut self) -> EscapeEffect {
        if self.is_modal_open() {
            self.close_document_modal();
            EscapeEffect::ClosedModal
        } else if self.is_open {
            self.close();
            EscapeEffect::ClosedWidget
        } else {
            EscapeEffect::Ignored
        }
    }

    /// Run a widget-level action. Returns `false` for actions that need
    /// data owned elsewhere (send, fill input, show sources).
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::ToggleWidget => self.toggle(),
            Action::CloseWidget => self.close(),
            Action::CloseModal => self.close_document_modal(),
            Action::Escape => {
                self.handle_escape();
            }
            Action::FocusInput => self.focus_input(),
            Action::SendMessage | Action::FillInput | Action::ShowSources => return false,
        }
        true
    }
}
