//! Poe bot-query integration
//!
//! Converts caller transcripts into bot-query shape and exposes the stream
//! capability seam: the [`BotQueryClient`] trait plus the reqwest-backed
//! [`PoeClient`] that speaks the server-sent-events wire protocol.

pub mod client;
pub mod converter;
pub mod streaming;
pub mod types;

use crate::error::PoeResult;
use crate::protocol::{QueryRequest, TextFragment};
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

pub use client::PoeClient;
pub use converter::{to_protocol_message, to_query_request};

/// Ordered stream of text fragments produced by a bot-query call
pub type FragmentStream = Pin<Box<dyn Stream<Item = PoeResult<TextFragment>> + Send>>;

/// Capability to stream tokens for a query.
///
/// Implementations own the transport. Errors may surface at open time or at
/// any pull; end-of-stream is the stream yielding `None` after a clean
/// completion signal.
#[async_trait]
pub trait BotQueryClient: Send + Sync {
    /// Open a fragment stream for `query`
    async fn stream_request(&self, query: QueryRequest) -> PoeResult<FragmentStream>;
}
