use super::*;
use crate::bindings::{Trigger, action_for};

fn doc(body: &str) -> Document {
    Document { body: body.to_owned() }
}

fn fire(state: &mut WidgetState, trigger: Trigger) -> bool {
    state.apply(action_for(trigger).unwrap())
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn widget_starts_closed_with_modal_hidden() {
    let state = WidgetState::default();
    assert!(!state.is_open);
    assert!(!state.is_modal_open());
    assert_eq!(state.focus_seq, 0);
}

// =============================================================
// open / close / toggle
// =============================================================

#[test]
fn open_shows_widget_and_requests_focus() {
    let mut state = WidgetState::default();
    state.open();
    assert!(state.is_open);
    assert_eq!(state.focus_seq, 1);
}

#[test]
fn open_and_close_are_idempotent() {
    let mut state = WidgetState::default();
    state.open();
    state.open();
    assert!(state.is_open);
    state.close();
    state.close();
    assert!(!state.is_open);
}

#[test]
fn toggle_alternates() {
    let mut state = WidgetState::default();
    state.toggle();
    assert!(state.is_open);
    state.toggle();
    assert!(!state.is_open);
}

#[test]
fn launcher_and_header_bindings_drive_visibility() {
    let mut state = WidgetState::default();
    assert!(fire(&mut state, Trigger::LauncherClick));
    assert!(state.is_open);
    assert!(fire(&mut state, Trigger::HeaderCloseClick));
    assert!(!state.is_open);
}

// =============================================================
// Modal
// =============================================================

#[test]
fn modal_is_independent_of_widget_visibility() {
    let mut state = WidgetState::default();
    state.open_document_modal(&[doc("A")]);
    assert!(state.is_modal_open());
    assert!(!state.is_open);
    state.open();
    state.close_document_modal();
    assert!(state.is_open);
    assert!(!state.is_modal_open());
}

#[test]
fn backdrop_binding_closes_modal() {
    let mut state = WidgetState::default();
    state.open_document_modal(&[doc("A")]);
    assert!(fire(&mut state, Trigger::ModalBackdropClick));
    assert!(!state.is_modal_open());
}

// =============================================================
// Escape priority
// =============================================================

#[test]
fn escape_closes_modal_before_widget() {
    let mut state = WidgetState::default();
    state.open();
    state.open_document_modal(&[doc("A")]);

    assert_eq!(state.handle_escape(), EscapeEffect::ClosedModal);
    assert!(!state.is_modal_open());
    assert!(state.is_open);

    assert_eq!(state.handle_escape(), EscapeEffect::ClosedWidget);
    assert!(!state.is_open);

    assert_eq!(state.handle_escape(), EscapeEffect::Ignored);
}

#[test]
fn escape_binding_closes_modal_when_widget_closed() {
    let mut state = WidgetState::default();
    state.open_document_modal(&[]);
    assert!(fire(&mut state, Trigger::EscapeKey));
    assert!(!state.is_modal_open());
    assert!(!state.is_open);
}

// =============================================================
// Focus and unhandled actions
// =============================================================

#[test]
fn focus_shortcut_bumps_focus_regardless_of_visibility() {
    let mut state = WidgetState::default();
    assert!(fire(&mut state, Trigger::FocusShortcut));
    assert_eq!(state.focus_seq, 1);
    assert!(!state.is_open);
}

#[test]
fn data_carrying_actions_are_left_to_the_caller() {
    let mut state = WidgetState::default();
    assert!(!state.apply(Action::SendMessage));
    assert!(!state.apply(Action::FillInput));
    assert!(!state.apply(Action::ShowSources));
    assert!(!state.is_open);
}
