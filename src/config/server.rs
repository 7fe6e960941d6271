//! Server configuration module.
//!
//! This module defines configuration for the stdio server loop itself:
//! naming, read granularity, and the cap on unterminated input.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name of the server (used in logs)
    pub name: String,

    /// Maximum bytes buffered without a terminating newline before the
    /// connection is closed
    pub max_pending_bytes: usize,

    /// Size of each read from the input stream
    pub read_chunk_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "makai-mcp".to_string(),
            max_pending_bytes: 10 * 1024 * 1024, // 10 MiB
            read_chunk_bytes: 8 * 1024,
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Validate server name
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Server name cannot be empty".to_string(),
            ));
        }

        // Validate max_pending_bytes
        if self.max_pending_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "max_pending_bytes must be greater than 0".to_string(),
            ));
        }

        // Validate read_chunk_bytes
        if self.read_chunk_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "read_chunk_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
