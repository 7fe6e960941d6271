//! Error module for the Makai MCP Server.
//!
//! This module provides the error handling framework for the entire
//! application, following Rust's idiomatic error handling patterns with
//! explicit error types and proper error propagation. Each subsystem owns
//! its error enum; `MakaiError` unifies them at the binary boundary.

use thiserror::Error;

pub mod config;
pub mod protocol;
pub mod scrape;
pub mod transport;

/// Result type alias used throughout the Makai MCP Server.
pub type MakaiResult<T> = Result<T, MakaiError>;

/// Core error enum for the Makai MCP Server.
#[derive(Error, Debug)]
pub enum MakaiError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors related to JSON-RPC protocol handling.
    #[error("Protocol error: {0}")]
    Protocol(#[from] protocol::ProtocolError),

    /// Errors related to the stdio transport.
    #[error("Transport error: {0}")]
    Transport(#[from] transport::TransportError),

    /// Errors related to outbound page fetching.
    #[error("Scrape error: {0}")]
    Scrape(#[from] scrape::ScrapeError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
