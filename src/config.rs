//! Widget configuration supplied by the host page.
//!
//! The host sets `data-*` attributes on the mount element; every key is
//! optional:
//! - `data-chat-endpoint`: chat URL (default `/api/chat`)
//! - `data-health-endpoint`: health URL (default `/api/health`)
//! - `data-title`, `data-placeholder`, `data-welcome-message`: copy
//! - `data-suggestions`: JSON array of `{"label": ..., "query": ...}`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_CHAT_ENDPOINT: &str = "/api/chat";
pub const DEFAULT_HEALTH_ENDPOINT: &str = "/api/health";
pub const DEFAULT_TITLE: &str = "MIDC Land Bank Assistant";
pub const DEFAULT_PLACEHOLDER: &str = "Ask about plots, industrial areas, or procedures...";
pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Hello! I can answer questions about MIDC land availability in English or Marathi. How can I help?";

/// Id of the element the widget mounts into when the host provides one.
pub const MOUNT_ELEMENT_ID: &str = "chat-widget";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `suggestions` was present but not a JSON list of suggestions.
    #[error("invalid suggestions: {0}")]
    Suggestions(String),
}

/// A canned query offered as a clickable chip.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub label: String,
    pub query: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub chat_endpoint: String,
    pub health_endpoint: String,
    pub title: String,
    pub placeholder: String,
    pub welcome_message: String,
    pub suggestions: Vec<Suggestion>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(),
            health_endpoint: DEFAULT_HEALTH_ENDPOINT.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_owned(),
            suggestions: Vec::new(),
        }
    }
}

impl WidgetConfig {
    /// Build a config from a key lookup (attribute names without `data-`).
    /// Missing or blank values keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Suggestions`] if `suggestions` is not valid JSON.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str, default: &str| non_blank(lookup(key)).unwrap_or_else(|| default.to_owned());

        let suggestions = match non_blank(lookup("suggestions")) {
            Some(raw) => parse_suggestions(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            chat_endpoint: value("chat-endpoint", DEFAULT_CHAT_ENDPOINT),
            health_endpoint: value("health-endpoint", DEFAULT_HEALTH_ENDPOINT),
            title: value("title", DEFAULT_TITLE),
            placeholder: value("placeholder", DEFAULT_PLACEHOLDER),
            welcome_message: value("welcome-message", DEFAULT_WELCOME_MESSAGE),
            suggestions,
        })
    }
}

/// Read the config from the mount element's `data-*` attributes, falling
/// back to defaults when the element is missing or the config is invalid.
#[cfg(feature = "csr")]
pub fn read_host_config() -> WidgetConfig {
    let Some(element) =
        web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(MOUNT_ELEMENT_ID))
    else {
        return WidgetConfig::default();
    };
    WidgetConfig::from_lookup(|key| element.get_attribute(&format!("data-{key}"))).unwrap_or_else(|e| {
        leptos::logging::warn!("chat widget config ignored: {e}");
        WidgetConfig::default()
    })
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_suggestions(raw: &str) -> Result<Vec<Suggestion>, ConfigError> {
    serde_json::from_str(raw).map_err(|e| ConfigError::Suggestions(e.to_string()))
}
