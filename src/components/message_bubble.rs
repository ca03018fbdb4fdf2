//! A single history entry.

use leptos::prelude::*;

use super::formatted_text::FormattedText;
use crate::state::conversation::{Document, Language, Message, Sender};
use crate::util::clock::format_time;
use crate::util::format::format_content;

/// Message bubble with capture time, language badge (bot only), and a
/// "View Sources" button when the reply carried documents.
#[component]
pub fn MessageBubble(message: Message, on_view_sources: Callback<Vec<Document>>) -> impl IntoView {
    let is_bot = message.sender == Sender::Bot;
    let is_user = !is_bot;
    let time = format_time(message.timestamp);
    let language = message.language.map(Language::label);
    let sources = message.source_documents;
    let body = format_content(message.content);

    view! {
        <div class="message" class:bot-message=is_bot class:user-message=is_user>
            <div class="message-avatar">{if is_bot { "🤖" } else { "👤" }}</div>
            <div class="message-content">
                {sources
                    .map(|docs| {
                        view! {
                            <button class="context-button" on:click=move |_| on_view_sources.run(docs.clone())>
                                "View Sources"
                            </button>
                        }
                    })}
                <div class="message-text">
                    <FormattedText content=body/>
                </div>
                <div class="message-time">
                    {time}
                    {language.map(|label| view! { <span class="language-indicator">{label}</span> })}
                </div>
            </div>
        </div>
    }
}
