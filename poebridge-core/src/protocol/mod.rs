//! Protocol module for bot-query request/response structures
//!
//! This module defines the data models exchanged with the Poe bot-query
//! service. These structures are designed to be:
//! - Type-safe and serializable
//! - Order-preserving (a query is an ordered transcript)
//! - Free of shared state (each request owns its own values)

pub mod types;

pub use types::{
    ChatGeneration, ChatMessage, ChatResult, ProtocolMessage, ProtocolRole, QueryRequest,
    TextFragment,
};
