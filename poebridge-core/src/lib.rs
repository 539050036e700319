//! Poebridge Core Library
//!
//! Adapter between generic multi-role chat transcripts and the Poe
//! bot-query streaming protocol. Normalizes messages into the three-role
//! wire shape, drives the token stream to completion, and assembles the
//! response for blocking or async callers.

pub mod chat;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod poe;
pub mod protocol;

pub use chat::{AsyncTokenSink, ChatPoe, NoopSink, TokenSink};
pub use config::PoeConfig;
pub use embeddings::Embeddings;
pub use error::{PoeError, PoeResult};
pub use poe::{BotQueryClient, FragmentStream, PoeClient};
pub use protocol::{ChatMessage, ChatResult, ProtocolMessage, ProtocolRole, QueryRequest};

/// Returns the version of the poebridge-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
