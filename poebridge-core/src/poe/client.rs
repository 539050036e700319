//! Reqwest-backed bot-query client

use crate::config::PoeConfig;
use crate::error::{PoeError, PoeResult};
use crate::poe::streaming::parse_stream;
use crate::poe::{BotQueryClient, FragmentStream};
use crate::protocol::QueryRequest;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use uuid::Uuid;

/// HTTP client speaking the bot-query SSE protocol.
///
/// Holds only the connection pool and configuration; every request carries
/// its own identity, so one client can serve concurrent independent calls.
pub struct PoeClient {
    config: PoeConfig,
    client: Client,
}

impl PoeClient {
    /// Create a client from configuration
    pub fn new(config: PoeConfig) -> PoeResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                PoeError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    fn endpoint(&self, bot_name: &str) -> String {
        format!("{}/bot/{}", self.config.base_url.trim_end_matches('/'), bot_name)
    }
}

#[async_trait]
impl BotQueryClient for PoeClient {
    async fn stream_request(&self, query: QueryRequest) -> PoeResult<FragmentStream> {
        let request_id = Uuid::new_v4();
        let url = self.endpoint(&query.bot_name);
        tracing::debug!(%request_id, bot = %query.bot_name, "Opening bot-query stream");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&query.api_key)
            .header("Accept", "text/event-stream")
            .json(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(%request_id, %status, "Bot-query request rejected");
            return Err(PoeError::StreamTransport(format!(
                "{}: {}",
                status, body
            )));
        }

        Ok(parse_stream(response.bytes_stream()))
    }
}
