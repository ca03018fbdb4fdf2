//! Widget container: header, message list, suggestions, and input row.

#[cfg(test)]
#[path = "chat_window_test.rs"]
mod chat_window_test;

use leptos::prelude::*;

use super::message_bubble::MessageBubble;
use crate::bindings::{KeyPress, Payload, Trigger, classify_input_key};
use crate::config::{Suggestion, WidgetConfig};
use crate::state::conversation::{ConversationState, Document};
use crate::state::widget::WidgetState;

/// The chat window shown while the widget is open.
#[component]
pub fn ChatWindow(
    config: WidgetConfig,
    welcome_time: String,
    input: RwSignal<String>,
    input_ref: NodeRef<leptos::html::Textarea>,
    dispatch: Callback<(Trigger, Payload)>,
) -> impl IntoView {
    let widget = expect_context::<RwSignal<WidgetState>>();
    let conversation = expect_context::<RwSignal<ConversationState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = conversation.with(|c| (c.messages().len(), c.typing));

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let on_view_sources =
        Callback::new(move |docs: Vec<Document>| dispatch.run((Trigger::ViewSourcesClick, Payload::Documents(docs))));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if let Some(trigger) = classify_input_key(&KeyPress::from_event(&ev)) {
            ev.prevent_default();
            dispatch.run((trigger, Payload::None));
        }
    };

    let WidgetConfig { title, placeholder, welcome_message, suggestions, .. } = config;
    let suggestions = suggestions
        .into_iter()
        .map(|Suggestion { label, query }| {
            view! {
                <button
                    class="suggestion"
                    on:click=move |_| dispatch.run((Trigger::SuggestionClick, Payload::Query(query.clone())))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="chat-widget" class:active=move || widget.with(|w| w.is_open)>
            <div class="chat-header">
                <div class="chat-header__title">{title}</div>
                <button
                    class="chat-toggle"
                    on:click=move |_| dispatch.run((Trigger::HeaderCloseClick, Payload::None))
                    title="Close chat"
                >
                    "✕"
                </button>
            </div>

            <div class="chat-messages" node_ref=messages_ref>
                <div class="message bot-message">
                    <div class="message-avatar">"🤖"</div>
                    <div class="message-content">
                        <div class="message-text">{welcome_message}</div>
                        <div class="message-time">{welcome_time}</div>
                    </div>
                </div>

                <For
                    each=move || conversation.with(|c| c.messages().to_vec())
                    key=|message| message.id.clone()
                    children=move |message| view! { <MessageBubble message=message on_view_sources=on_view_sources/> }
                />

                <Show when=move || conversation.with(|c| c.typing)>
                    <div class="typing-indicator">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </Show>
            </div>

            <div class="chat-suggestions">{suggestions}</div>

            <div class="chat-input-row">
                <textarea
                    class="message-input"
                    rows="1"
                    placeholder=placeholder
                    node_ref=input_ref
                    prop:value=move || input.get()
                    on:input=move |ev| {
                        input.set(event_target_value(&ev));
                        #[cfg(feature = "csr")]
                        {
                            if let Some(el) = input_ref.get() {
                                let style = el.style();
                                let _ = style.set_property("height", "auto");
                                let _ = style.set_property("height", &fit_height(el.scroll_height()));
                            }
                        }
                    }
                    on:keydown=on_keydown
                ></textarea>
                <button
                    class="send-button"
                    disabled=move || !conversation.with(ConversationState::is_send_enabled)
                    on:click=move |_| dispatch.run((Trigger::SendClick, Payload::None))
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// Inline height that fits a textarea to its content.
#[cfg(any(test, feature = "csr"))]
fn fit_height(scroll_height: i32) -> String {
    format!("{}px", scroll_height.max(0))
}
