use super::*;

const ALL_TRIGGERS: [Trigger; 10] = [
    Trigger::LauncherClick,
    Trigger::HeaderCloseClick,
    Trigger::SendClick,
    Trigger::InputEnter,
    Trigger::SuggestionClick,
    Trigger::ViewSourcesClick,
    Trigger::ModalCloseClick,
    Trigger::ModalBackdropClick,
    Trigger::EscapeKey,
    Trigger::FocusShortcut,
];

#[test]
fn every_trigger_has_exactly_one_binding() {
    for trigger in ALL_TRIGGERS {
        let count = BINDINGS.iter().filter(|b| b.trigger == trigger).count();
        assert_eq!(count, 1, "{trigger:?}");
    }
    assert_eq!(BINDINGS.len(), ALL_TRIGGERS.len());
}

#[test]
fn launcher_toggles_and_header_closes() {
    assert_eq!(action_for(Trigger::LauncherClick), Some(Action::ToggleWidget));
    assert_eq!(action_for(Trigger::HeaderCloseClick), Some(Action::CloseWidget));
}

#[test]
fn send_click_and_enter_both_send() {
    assert_eq!(action_for(Trigger::SendClick), Some(Action::SendMessage));
    assert_eq!(action_for(Trigger::InputEnter), Some(Action::SendMessage));
}

#[test]
fn modal_close_paths_share_an_action() {
    assert_eq!(action_for(Trigger::ModalCloseClick), Some(Action::CloseModal));
    assert_eq!(action_for(Trigger::ModalBackdropClick), Some(Action::CloseModal));
}

#[test]
fn global_keys_classify() {
    assert_eq!(classify_global_key(&KeyPress::new("Escape")), Some(Trigger::EscapeKey));
    assert_eq!(
        classify_global_key(&KeyPress { key: "k".into(), ctrl: true, ..KeyPress::default() }),
        Some(Trigger::FocusShortcut)
    );
    assert_eq!(
        classify_global_key(&KeyPress { key: "k".into(), meta: true, ..KeyPress::default() }),
        Some(Trigger::FocusShortcut)
    );
    assert_eq!(classify_global_key(&KeyPress::new("k")), None);
    assert_eq!(classify_global_key(&KeyPress::new("Enter")), None);
}

#[test]
fn enter_sends_but_shift_enter_does_not() {
    assert_eq!(classify_input_key(&KeyPress::new("Enter")), Some(Trigger::InputEnter));
    assert_eq!(classify_input_key(&KeyPress { key: "Enter".into(), shift: true, ..KeyPress::default() }), None);
    assert_eq!(classify_input_key(&KeyPress::new("a")), None);
}

#[test]
fn backdrop_only_counts_on_outer_surface() {
    assert_eq!(backdrop_trigger(true), Some(Trigger::ModalBackdropClick));
    assert_eq!(backdrop_trigger(false), None);
}
