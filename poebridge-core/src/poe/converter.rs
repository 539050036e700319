//! Conversion between caller transcripts and bot-query shape

use crate::error::{PoeError, PoeResult};
use crate::protocol::{ChatMessage, ProtocolMessage, ProtocolRole, QueryRequest};

/// Normalize one message into the three-role protocol representation.
///
/// Pure function. The mapping is closed: a generic label outside
/// `{Human, AI, System}` is an error, surfaced before any network call is
/// made. Text bodies pass through unchanged.
pub fn to_protocol_message(message: &ChatMessage) -> PoeResult<ProtocolMessage> {
    let role = match message {
        ChatMessage::Chat { role, .. } => match role.as_str() {
            "Human" => ProtocolRole::User,
            "AI" => ProtocolRole::Bot,
            "System" => ProtocolRole::System,
            other => return Err(PoeError::UnsupportedRole(other.to_string())),
        },
        ChatMessage::Human { .. } => ProtocolRole::User,
        ChatMessage::Assistant { .. } => ProtocolRole::Bot,
        ChatMessage::System { .. } => ProtocolRole::System,
    };

    Ok(ProtocolMessage::new(role, message.content()))
}

/// Request identity fields carried into every query
#[derive(Debug, Clone, Default)]
pub struct RequestIdentity {
    pub bot_name: String,
    pub api_key: String,
    pub user_id: String,
    pub conversation_id: String,
    pub message_id: String,
    pub version: String,
}

/// Build a [`QueryRequest`] from an ordered transcript.
///
/// Normalization is 1:1 and order-preserving; the first unmappable message
/// fails the whole conversion.
pub fn to_query_request(
    messages: &[ChatMessage],
    identity: &RequestIdentity,
) -> PoeResult<QueryRequest> {
    let query = messages
        .iter()
        .map(to_protocol_message)
        .collect::<PoeResult<Vec<_>>>()?;

    Ok(QueryRequest::new(identity.bot_name.clone(), query)
        .with_api_key(identity.api_key.clone())
        .with_user_id(identity.user_id.clone())
        .with_conversation_id(identity.conversation_id.clone())
        .with_message_id(identity.message_id.clone())
        .with_version(identity.version.clone()))
}
