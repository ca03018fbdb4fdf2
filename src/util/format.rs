//! Bot response formatting: raw text to display-safe structured content.
//!
//! DESIGN
//! ======
//! Response text comes from a remote service, so it is never spliced into
//! markup. `format_message` builds a small tree of lines and inlines
//! (text runs and links) that the view turns into discrete DOM nodes.
//! `FormattedMessage::to_html` is the only markup sink and escapes each
//! text run exactly once on the way out.
//!
//! Rules, applied per line in this order:
//! 1. split on `\n` (a trailing `\r` is dropped),
//! 2. a leading `•`, `*` or `-` (after whitespace) becomes a single `• `,
//! 3. whitespace before a `<digits>.` marker is removed,
//! 4. bare `http://` / `https://` runs become links labelled with the URL.
//!
//! Escaping never maps a character to whitespace, so URL token boundaries
//! are the same whether scanned before or after escaping.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::borrow::Cow;

/// Canonical bullet prefix for normalized list lines.
pub const BULLET: char = '•';
/// Browsing context links open in.
pub const LINK_TARGET: &str = "_blank";
/// Link relation: no opener handle, no referrer.
pub const LINK_REL: &str = "noopener noreferrer";

const HTTP_SCHEME: &str = "http://";
const HTTPS_SCHEME: &str = "https://";

/// One inline run within a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    /// Literal text. Rendered as a text node; never interpreted as markup.
    Text(String),
    /// Autolinked URL. The URL is both the target and the visible label.
    Link(String),
}

/// A single display line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormattedLine {
    inlines: Vec<Inline>,
}

impl FormattedLine {
    pub fn inlines(&self) -> &[Inline] {
        &self.inlines
    }

    pub fn into_inlines(self) -> Vec<Inline> {
        self.inlines
    }

    /// Text of the line with links flattened back to their URL.
    pub fn plain_text(&self) -> String {
        self.inlines
            .iter()
            .map(|inline| match inline {
                Inline::Text(text) | Inline::Link(text) => text.as_str(),
            })
            .collect()
    }

    fn to_html(&self) -> String {
        self.inlines
            .iter()
            .map(|inline| match inline {
                Inline::Text(text) => escape_html(text).into_owned(),
                Inline::Link(url) => {
                    let url = escape_html(url);
                    format!(r#"<a href="{url}" target="{LINK_TARGET}" rel="{LINK_REL}">{url}</a>"#)
                }
            })
            .collect()
    }
}

/// Structured, display-safe message body. Lines are separated by explicit
/// line breaks when rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormattedMessage {
    lines: Vec<FormattedLine>,
}

impl FormattedMessage {
    pub fn lines(&self) -> &[FormattedLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<FormattedLine> {
        self.lines
    }

    /// Flatten back to text, one `\n` per line break.
    pub fn plain_text(&self) -> String {
        self.lines.iter().map(FormattedLine::plain_text).collect::<Vec<_>>().join("\n")
    }

    /// Serialize to an HTML fragment with every text run escaped once.
    pub fn to_html(&self) -> String {
        self.lines.iter().map(FormattedLine::to_html).collect::<Vec<_>>().join("<br>")
    }
}

/// Input accepted by [`format_content`]: raw text, or content that has
/// already been built and must pass through untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageContent {
    Plain(String),
    Formatted(FormattedMessage),
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_owned())
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<FormattedMessage> for MessageContent {
    fn from(message: FormattedMessage) -> Self {
        Self::Formatted(message)
    }
}

/// Format plain text, or pass prebuilt content through unchanged.
pub fn format_content(content: impl Into<MessageContent>) -> FormattedMessage {
    match content.into() {
        MessageContent::Plain(text) => format_message(&text),
        MessageContent::Formatted(message) => message,
    }
}

/// Format raw response text into structured lines.
pub fn format_message(text: &str) -> FormattedMessage {
    let lines = text
        .split('\n')
        .map(|raw| {
            let raw = raw.strip_suffix('\r').unwrap_or(raw);
            let normalized = normalize_list_marker(raw);
            FormattedLine { inlines: autolink(&normalized) }
        })
        .collect();
    FormattedMessage { lines }
}

/// Escape characters that carry meaning in HTML.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

fn normalize_list_marker(line: &str) -> Cow<'_, str> {
    let rest = line.trim_start();
    if let Some(after) = rest.strip_prefix([BULLET, '*', '-']) {
        return Cow::Owned(format!("{BULLET} {}", after.trim_start()));
    }
    if starts_with_numbered_marker(rest) {
        return Cow::Borrowed(rest);
    }
    Cow::Borrowed(line)
}

fn starts_with_numbered_marker(text: &str) -> bool {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && text.as_bytes().get(digits) == Some(&b'.')
}

fn autolink(line: &str) -> Vec<Inline> {
    let mut inlines = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;

    while let Some(offset) = find_scheme(&line[cursor..]) {
        let start = cursor + offset;
        let tail = &line[start..];
        let len = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let scheme_len = if tail.starts_with(HTTPS_SCHEME) { HTTPS_SCHEME.len() } else { HTTP_SCHEME.len() };

        // A bare scheme with nothing after it is not a link.
        if len > scheme_len {
            push_text(&mut inlines, &line[text_start..start]);
            inlines.push(Inline::Link(tail[..len].to_owned()));
            text_start = start + len;
            cursor = text_start;
        } else {
            cursor = start + scheme_len;
        }
    }

    push_text(&mut inlines, &line[text_start..]);
    inlines
}

fn find_scheme(text: &str) -> Option<usize> {
    [text.find(HTTP_SCHEME), text.find(HTTPS_SCHEME)].into_iter().flatten().min()
}

fn push_text(inlines: &mut Vec<Inline>, text: &str) {
    if !text.is_empty() {
        inlines.push(Inline::Text(text.to_owned()));
    }
}
