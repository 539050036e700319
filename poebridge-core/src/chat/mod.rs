//! Streaming chat adapter over the bot-query capability
//!
//! [`ChatPoe`] normalizes a transcript, opens a fragment stream through an
//! injected [`BotQueryClient`], and assembles the streamed chunks into one
//! [`ChatResult`]. Two consumption disciplines share the same semantics:
//! [`ChatPoe::generate`] blocks the calling thread, [`ChatPoe::generate_async`]
//! suspends cooperatively. Either the full response is returned or the call
//! fails; a partial result is never surfaced.

mod bridge;
mod sink;

pub use sink::{AsyncTokenSink, NoopSink, TokenSink};

use crate::error::PoeResult;
use crate::poe::converter::{to_query_request, RequestIdentity};
use crate::poe::BotQueryClient;
use crate::protocol::{ChatMessage, ChatResult, QueryRequest};
use futures::StreamExt;
use std::sync::Arc;

/// Chat adapter addressing one bot on behalf of one request identity.
///
/// Holds no per-call state: every invocation builds its own query and its
/// own accumulation buffer, so concurrent calls on a shared adapter are
/// independent.
pub struct ChatPoe {
    client: Arc<dyn BotQueryClient>,
    identity: RequestIdentity,
}

impl ChatPoe {
    /// Create an adapter for `bot_name` using `client` as the transport
    pub fn new(
        client: Arc<dyn BotQueryClient>,
        bot_name: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            identity: RequestIdentity {
                bot_name: bot_name.into(),
                api_key: api_key.into(),
                version: "1.0".to_string(),
                ..RequestIdentity::default()
            },
        }
    }

    /// Set the user id
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.identity.user_id = user_id.into();
        self
    }

    /// Set the conversation id
    pub fn with_conversation_id(mut self, conversation_id: impl Into<String>) -> Self {
        self.identity.conversation_id = conversation_id.into();
        self
    }

    /// Set the message id
    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.identity.message_id = message_id.into();
        self
    }

    /// Set the protocol version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.identity.version = version.into();
        self
    }

    // Stop sequences are accepted for interface compatibility and passed
    // through unused; the bot-query protocol has no equivalent field.
    fn build_query(
        &self,
        messages: &[ChatMessage],
        _stop: Option<&[String]>,
    ) -> PoeResult<QueryRequest> {
        to_query_request(messages, &self.identity)
    }

    /// Run one chat request, blocking the calling thread.
    ///
    /// Normalization errors surface before the transport is touched. Every
    /// fragment is appended to the running buffer and then handed to `sink`,
    /// so notification order equals arrival order. A stream error aborts the
    /// call and discards the partial buffer.
    ///
    /// Precondition: must not be called from inside a tokio runtime; use
    /// [`ChatPoe::generate_async`] there instead.
    pub fn generate(
        &self,
        messages: &[ChatMessage],
        stop: Option<&[String]>,
        sink: &dyn TokenSink,
    ) -> PoeResult<ChatResult> {
        let query = self.build_query(messages, stop)?;
        let receiver = bridge::spawn_stream_worker(Arc::clone(&self.client), query)?;

        let mut response = String::new();
        while let Ok(item) = receiver.recv() {
            let fragment = item?;
            response.push_str(&fragment.text);
            sink.on_token(&fragment.text);
        }

        Ok(ChatResult::from_response(response))
    }

    /// Run one chat request, suspending cooperatively.
    ///
    /// Same semantics as [`ChatPoe::generate`]; `sink.on_token` is awaited
    /// before the next fragment is pulled.
    pub async fn generate_async(
        &self,
        messages: &[ChatMessage],
        stop: Option<&[String]>,
        sink: &dyn AsyncTokenSink,
    ) -> PoeResult<ChatResult> {
        let query = self.build_query(messages, stop)?;
        let mut stream = self.client.stream_request(query).await?;

        let mut response = String::new();
        while let Some(item) = stream.next().await {
            let fragment = item?;
            response.push_str(&fragment.text);
            sink.on_token(&fragment.text).await;
        }

        Ok(ChatResult::from_response(response))
    }
}
