//! Wire payload types for the bot-query event stream

use serde::Deserialize;

/// Payload of a `text` event: one partial response chunk
#[derive(Debug, Clone, Deserialize)]
pub struct TextEventPayload {
    pub text: String,
}

/// Payload of an `error` event
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEventPayload {
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub allow_retry: bool,
}
