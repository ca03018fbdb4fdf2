//! DOM rendering of formatted message text.
//!
//! Text runs become text nodes and links become anchors, so response text
//! is never parsed as markup.

#[cfg(test)]
#[path = "formatted_text_test.rs"]
mod formatted_text_test;

use leptos::prelude::*;

use crate::util::format::{FormattedMessage, Inline, LINK_REL, LINK_TARGET};

/// Lines separated by `<br>`, with autolinked URLs.
#[component]
pub fn FormattedText(content: FormattedMessage) -> impl IntoView {
    let lines = content.into_lines();
    let last = lines.len().saturating_sub(1);

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let inlines = line.into_inlines().into_iter().map(render_inline).collect_view();
            view! {
                <span class="message-line">{inlines}</span>
                {(i < last).then(|| view! { <br/> })}
            }
        })
        .collect_view()
}

fn render_inline(inline: Inline) -> AnyView {
    match inline {
        Inline::Text(text) => text.into_any(),
        Inline::Link(url) => {
            let href = url.clone();
            view! {
                <a href=href target=LINK_TARGET rel=LINK_REL>
                    {url}
                </a>
            }
            .into_any()
        }
    }
}
