//! Error types for the Poe adapter

use thiserror::Error;

/// Result type for adapter operations
pub type PoeResult<T> = Result<T, PoeError>;

/// Errors that can occur while normalizing messages or driving a bot-query
/// stream.
#[derive(Debug, Error)]
pub enum PoeError {
    /// A generically-labeled message carries a role outside `{Human, AI, System}`
    #[error("Unhandled message role: {0}")]
    UnsupportedRole(String),

    /// The bot-query transport failed before or during streaming
    #[error("Stream transport error: {0}")]
    StreamTransport(String),

    /// The event stream closed before the bot signalled completion
    #[error("Stream ended before the bot signalled completion")]
    PrematureEndOfStream,

    /// Request timed out
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Configuration error (bad base URL, unbuildable HTTP client, ...)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The blocking bridge could not run the stream to completion
    #[error("Stream worker failed: {0}")]
    Bridge(String),

    /// Operation is not supported by this implementation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

impl From<reqwest::Error> for PoeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PoeError::Timeout(120) // Default timeout value
        } else if err.is_connect() {
            PoeError::StreamTransport(format!("Connection failed: {}", err))
        } else {
            PoeError::StreamTransport(err.to_string())
        }
    }
}
