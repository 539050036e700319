//! Core protocol types for the bot-query adapter
//!
//! Two vocabularies meet here. `ChatMessage` is the caller-facing transcript
//! representation with an open role label on its generic variant.
//! `ProtocolMessage` is the three-role shape the bot-query wire protocol
//! accepts. Conversion between the two lives in `poe::converter` and is
//! strict: unknown roles are rejected, never guessed.

use serde::{Deserialize, Serialize};

/// A single turn of a conversation as supplied by the caller.
///
/// The `Chat` variant carries a free-text role label; the remaining variants
/// are the typed message kinds. The set is closed, so the normalizer can
/// match exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatMessage {
    /// Generic message with an explicit role label
    Chat { role: String, content: String },
    /// Message authored by the human user
    Human { content: String },
    /// Message authored by the model
    Assistant { content: String },
    /// System instructions
    System { content: String },
}

impl ChatMessage {
    /// Create a generic labeled message
    pub fn chat(role: impl Into<String>, content: impl Into<String>) -> Self {
        ChatMessage::Chat {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a human message
    pub fn human(content: impl Into<String>) -> Self {
        ChatMessage::Human {
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage::Assistant {
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage::System {
            content: content.into(),
        }
    }

    /// Text body of the message
    pub fn content(&self) -> &str {
        match self {
            ChatMessage::Chat { content, .. }
            | ChatMessage::Human { content }
            | ChatMessage::Assistant { content }
            | ChatMessage::System { content } => content,
        }
    }
}

/// Role of a message in the bot-query protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolRole {
    /// Input from the user
    User,
    /// Output from a bot
    Bot,
    /// System instructions
    System,
}

impl ProtocolRole {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolRole::User => "user",
            ProtocolRole::Bot => "bot",
            ProtocolRole::System => "system",
        }
    }
}

/// A message in the restricted three-role representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolMessage {
    /// Role of the message sender
    pub role: ProtocolRole,

    /// Content of the message
    pub content: String,
}

impl ProtocolMessage {
    /// Create a protocol message
    pub fn new(role: ProtocolRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// A bot-query request: the normalized transcript plus request identity.
///
/// Constructed once per invocation and passed by value to the stream
/// capability. The bot name routes the request and is not part of the
/// serialized payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Ordered transcript in protocol shape
    pub query: Vec<ProtocolMessage>,

    /// Request type discriminator, always `"query"`
    #[serde(rename = "type")]
    pub request_type: String,

    /// Name of the bot to query (routing only, not serialized)
    #[serde(skip)]
    pub bot_name: String,

    /// API key identifying the calling bot
    pub api_key: String,

    /// Opaque user identity
    pub user_id: String,

    /// Opaque conversation identity
    pub conversation_id: String,

    /// Opaque message identity
    pub message_id: String,

    /// Protocol version string
    pub version: String,
}

impl QueryRequest {
    /// Create a query for `bot_name` with empty identity fields
    pub fn new(bot_name: impl Into<String>, query: Vec<ProtocolMessage>) -> Self {
        Self {
            query,
            request_type: "query".to_string(),
            bot_name: bot_name.into(),
            api_key: String::new(),
            user_id: String::new(),
            conversation_id: String::new(),
            message_id: String::new(),
            version: "1.0".to_string(),
        }
    }

    /// Set the api key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the user id
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Set the conversation id
    pub fn with_conversation_id(mut self, conversation_id: impl Into<String>) -> Self {
        self.conversation_id = conversation_id.into();
        self
    }

    /// Set the message id
    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    /// Set the protocol version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// One chunk of streamed bot output.
///
/// Fragments are transient: the aggregator appends the text and drops the
/// value. Concatenating every fragment of a request, in arrival order,
/// yields the full response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFragment {
    /// Text carried by this chunk
    pub text: String,
}

impl TextFragment {
    /// Create a fragment
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A single generation candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatGeneration {
    /// Generated message (always an assistant message)
    pub message: ChatMessage,

    /// Display text, an echo of the generated content
    pub text: String,
}

/// Final result of one chat invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResult {
    /// Generation candidates; this adapter always produces exactly one
    pub generations: Vec<ChatGeneration>,
}

impl ChatResult {
    /// Build a single-candidate result from the accumulated response text
    pub fn from_response(response: impl Into<String>) -> Self {
        let text = response.into();
        Self {
            generations: vec![ChatGeneration {
                message: ChatMessage::assistant(text.clone()),
                text,
            }],
        }
    }

    /// Text of the first (and only) generation
    pub fn text(&self) -> &str {
        self.generations
            .first()
            .map(|g| g.text.as_str())
            .unwrap_or_default()
    }
}
