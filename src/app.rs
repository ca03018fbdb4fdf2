//! Root widget component: state contexts, input dispatch, startup probe.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::bindings::{KeyPress, classify_global_key};
use crate::bindings::{Action, Payload, Trigger, action_for};
use crate::components::chat_window::ChatWindow;
use crate::components::source_modal::SourceModal;
use crate::config::WidgetConfig;
use crate::net::api::HttpBackend;
use crate::services::conversation::ConversationPipeline;
use crate::state::conversation::ConversationState;
use crate::state::widget::WidgetState;
use crate::util::clock::{format_time, now_ms};

/// Root widget component.
///
/// Owns one `WidgetState` and one `ConversationState` for the lifetime of
/// the mount, provides them as context, and routes every input through the
/// binding table in `crate::bindings`.
#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let widget = RwSignal::new(WidgetState::default());
    let conversation = RwSignal::new(ConversationState::default());
    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    provide_context(widget);
    provide_context(conversation);

    let backend = HttpBackend::new(&config);
    let pipeline = StoredValue::new(ConversationPipeline::new(backend.clone(), conversation));
    let welcome_time = format_time(now_ms());

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            crate::services::health::probe(&backend).await;
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = backend;

    let send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() || !conversation.with_untracked(ConversationState::is_send_enabled) {
            return;
        }
        input.set(String::new());
        let pipeline = pipeline.get_value();

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                pipeline.send_message(&text).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (pipeline, text);
    };

    let dispatch = Callback::new(move |(trigger, payload): (Trigger, Payload)| {
        match (action_for(trigger), payload) {
            (Some(Action::SendMessage), _) => send(),
            (Some(Action::FillInput), Payload::Query(query)) => {
                input.set(query);
                widget.update(WidgetState::focus_input);
            }
            (Some(Action::ShowSources), Payload::Documents(docs)) => {
                widget.update(|w| w.open_document_modal(&docs));
            }
            (Some(action), _) => widget.update(|w| {
                w.apply(action);
            }),
            (None, _) => {}
        }
    });

    Effect::new(move || {
        let seq = widget.with(|w| w.focus_seq) + conversation.with(|c| c.focus_seq);

        #[cfg(feature = "csr")]
        {
            if seq > 0 {
                if let Some(el) = input_ref.get() {
                    let _ = el.focus();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = seq;
    });

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if let Some(trigger) = classify_global_key(&KeyPress::from_event(&ev)) {
                if trigger == Trigger::FocusShortcut {
                    ev.prevent_default();
                }
                dispatch.run((trigger, Payload::None));
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="chat-widget-root">
            <button
                class="floating-chat-btn"
                on:click=move |_| dispatch.run((Trigger::LauncherClick, Payload::None))
                title="Chat with us"
            >
                "💬"
            </button>
            <ChatWindow config=config welcome_time=welcome_time input=input input_ref=input_ref dispatch=dispatch/>
            <SourceModal dispatch=dispatch/>
        </div>
    }
}
