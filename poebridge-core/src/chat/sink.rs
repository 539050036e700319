//! Per-fragment notification sinks
//!
//! The sink is an injected capability rather than an optional callback:
//! "no notification" is the [`NoopSink`], not a null check in the
//! aggregation loop.

use async_trait::async_trait;

/// Synchronous notification sink, used by the blocking entry point.
///
/// Called once per fragment, immediately after the fragment is appended to
/// the running buffer, in arrival order.
pub trait TokenSink: Send + Sync {
    /// Observe one streamed token
    fn on_token(&self, token: &str);
}

/// Suspend-capable notification sink, used by the async entry point.
///
/// Awaited before the next fragment is pulled, so at most one fragment is
/// in flight at a time.
#[async_trait]
pub trait AsyncTokenSink: Send + Sync {
    /// Observe one streamed token
    async fn on_token(&self, token: &str);
}

/// Sink that discards every token
pub struct NoopSink;

impl TokenSink for NoopSink {
    fn on_token(&self, _token: &str) {}
}

#[async_trait]
impl AsyncTokenSink for NoopSink {
    async fn on_token(&self, _token: &str) {}
}
