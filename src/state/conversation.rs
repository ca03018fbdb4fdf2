//! Conversation history and the pending-request flag.
//!
//! DESIGN
//! ======
//! Transitions are plain `&mut self` methods so the async pipeline in
//! `services::conversation` only sequences them. History is private and
//! only ever pushed to: no message is edited or removed once appended.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use crate::net::types::{ApiError, ChatResponse, ContextDoc};

/// Prefix for bot messages built from an application error.
pub const APOLOGY_PREFIX: &str = "Sorry, I encountered an error: ";
/// Bot message shown when the chat request could not complete.
pub const CONNECTIVITY_APOLOGY: &str = "Sorry, I'm having trouble connecting. Please try again later.";
/// Document body when the backend sent neither `content` nor `text`.
pub const NO_CONTENT_PLACEHOLDER: &str = "No content available";

const UNKNOWN_ERROR: &str = "unknown error";
const EMPTY_RESPONSE_ERROR: &str = "empty response";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// Response language. The backend tags regional answers as `"marathi"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Regional,
}

impl Language {
    /// Map the wire tag; anything other than `"marathi"` is English.
    pub fn from_wire(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) if tag.eq_ignore_ascii_case("marathi") => Self::Regional,
            _ => Self::English,
        }
    }

    /// Badge label shown next to a bot message.
    pub fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Regional => "मराठी",
        }
    }
}

/// A supporting source displayed in the document modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub body: String,
}

impl Document {
    /// `content`, else `text`, else the placeholder. Empty strings count as absent.
    pub fn from_wire(doc: ContextDoc) -> Self {
        let body = doc
            .content
            .filter(|s| !s.is_empty())
            .or(doc.text.filter(|s| !s.is_empty()))
            .unwrap_or_else(|| NO_CONTENT_PLACEHOLDER.to_owned());
        Self { body }
    }
}

/// One history entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    /// Capture time in milliseconds since the Unix epoch; display only.
    pub timestamp: f64,
    /// Only set on bot messages.
    pub language: Option<Language>,
    /// Only set on bot messages that carried at least one source.
    pub source_documents: Option<Vec<Document>>,
}

impl Message {
    pub fn user(content: impl Into<String>, timestamp: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::User,
            content: content.into(),
            timestamp,
            language: None,
            source_documents: None,
        }
    }

    pub fn bot(content: impl Into<String>, timestamp: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::Bot,
            content: content.into(),
            timestamp,
            language: Some(Language::English),
            source_documents: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    #[must_use]
    pub fn with_sources(mut self, docs: Vec<Document>) -> Self {
        self.source_documents = (!docs.is_empty()).then_some(docs);
        self
    }
}

/// Why a send was not started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendRejected {
    /// Input trimmed to nothing.
    Empty,
    /// Another request is still outstanding.
    Pending,
}

/// Which branch produced the bot reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyKind {
    Answered,
    ApplicationError,
    TransportFailure,
}

#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    history: Vec<Message>,
    /// True exactly while one chat request is outstanding.
    pub pending: bool,
    /// Typing indicator visibility.
    pub typing: bool,
    /// Bumped whenever input focus should return to the message field.
    pub focus_seq: u64,
}

impl ConversationState {
    pub fn messages(&self) -> &[Message] {
        &self.history
    }

    pub fn is_send_enabled(&self) -> bool {
        !self.pending
    }

    /// Start a send: append the trimmed text as a user message and mark the
    /// request pending. Returns the payload to post.
    ///
    /// # Errors
    ///
    /// Returns [`SendRejected`] without touching state if the input is blank
    /// or a request is already pending.
    pub fn begin_send(&mut self, raw: &str, timestamp: f64) -> Result<String, SendRejected> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(SendRejected::Empty);
        }
        if self.pending {
            return Err(SendRejected::Pending);
        }
        self.history.push(Message::user(text, timestamp));
        self.pending = true;
        self.typing = true;
        Ok(text.to_owned())
    }

    /// Append the bot reply for a settled request and hide the typing
    /// indicator. Does not clear `pending`; see [`Self::finish_send`].
    pub fn apply_reply(&mut self, outcome: Result<ChatResponse, ApiError>, timestamp: f64) -> ReplyKind {
        self.typing = false;
        let (message, kind) = reply_message(outcome, timestamp);
        self.history.push(message);
        kind
    }

    /// Recovery step run once per send on every exit path.
    pub fn finish_send(&mut self) {
        self.pending = false;
        self.typing = false;
        self.focus_seq += 1;
    }
}

fn reply_message(outcome: Result<ChatResponse, ApiError>, timestamp: f64) -> (Message, ReplyKind) {
    match outcome {
        Err(_) => (Message::bot(CONNECTIVITY_APOLOGY, timestamp), ReplyKind::TransportFailure),
        Ok(resp) if !resp.success => {
            let error = resp.error.unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
            (Message::bot(format!("{APOLOGY_PREFIX}{error}"), timestamp), ReplyKind::ApplicationError)
        }
        Ok(ChatResponse { response: None, .. }) => {
            (Message::bot(format!("{APOLOGY_PREFIX}{EMPTY_RESPONSE_ERROR}"), timestamp), ReplyKind::ApplicationError)
        }
        Ok(ChatResponse { response: Some(text), context_docs, language, .. }) => {
            let docs = context_docs.unwrap_or_default().into_iter().map(Document::from_wire).collect();
            let message = Message::bot(text, timestamp)
                .with_language(Language::from_wire(language.as_deref()))
                .with_sources(docs);
            (message, ReplyKind::Answered)
        }
    }
}
