//! HTTP client configuration module.
//!
//! This module defines configuration for the outbound page-fetch client.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// User agent string sent with each fetch
    pub user_agent: String,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,

    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,

    /// Whether to follow redirects
    pub follow_redirects: bool,

    /// Maximum number of redirects to follow
    pub max_redirects: usize,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            request_timeout_ms: 10_000,
            connect_timeout_ms: 5_000,
            follow_redirects: true,
            max_redirects: 10,
        }
    }
}

impl Validate for HttpClientConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Validate user_agent
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "user_agent cannot be empty".to_string(),
            ));
        }

        // Validate request_timeout_ms
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "request_timeout_ms must be greater than 0".to_string(),
            ));
        }

        // Validate connect_timeout_ms
        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "connect_timeout_ms must be greater than 0".to_string(),
            ));
        }

        // Validate max_redirects
        if self.follow_redirects && self.max_redirects == 0 {
            return Err(ConfigError::ValidationError(
                "max_redirects must be greater than 0 when follow_redirects is enabled".to_string(),
            ));
        }

        Ok(())
    }
}
