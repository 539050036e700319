//! Streams a response from a Poe bot and prints tokens as they arrive.
//!
//! Usage:
//!   POE_API_KEY=... cargo run --example stream_demo -- "your question"

use async_trait::async_trait;
use poebridge_core::{AsyncTokenSink, ChatMessage, ChatPoe, PoeClient, PoeConfig};
use std::io::Write;
use std::sync::Arc;

struct StdoutSink;

#[async_trait]
impl AsyncTokenSink for StdoutSink {
    async fn on_token(&self, token: &str) {
        print!("{}", token);
        let _ = std::io::stdout().flush();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let api_key = std::env::var("POE_API_KEY")
        .map_err(|_| anyhow::anyhow!("POE_API_KEY not set"))?;
    let question = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "What is the capital of France?".to_string());

    let client = Arc::new(PoeClient::new(PoeConfig::from_env())?);
    let chat = ChatPoe::new(client, "Assistant", api_key)
        .with_user_id("demo-user")
        .with_conversation_id("demo-conversation")
        .with_message_id("demo-message");

    let messages = vec![
        ChatMessage::system("You are a concise assistant."),
        ChatMessage::human(question),
    ];

    let result = chat.generate_async(&messages, None, &StdoutSink).await?;
    println!();
    tracing::info!("Received {} characters", result.text().len());

    Ok(())
}
