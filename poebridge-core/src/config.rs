//! Client configuration

use crate::error::{PoeError, PoeResult};
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://api.poe.com";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the bot-query HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoeConfig {
    /// Base URL of the bot-query service
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PoeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PoeConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// Honors `POE_BASE_URL` and `POE_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let base_url = env::var("POE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = env::var("POE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout_secs,
        }
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> PoeResult<()> {
        Url::parse(&self.base_url)
            .map_err(|e| PoeError::Configuration(format!("Invalid base URL: {}", e)))?;
        if self.timeout_secs == 0 {
            return Err(PoeError::Configuration(
                "Timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PoeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn rejects_malformed_base_url() {
        let config = PoeConfig::default().with_base_url("not a url");
        assert!(matches!(
            config.validate(),
            Err(PoeError::Configuration(_))
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = PoeConfig::default().with_timeout_secs(0);
        assert!(config.validate().is_err());
    }
}
