//! Scrape error module.
//!
//! This module defines error types that may occur while fetching and
//! extracting a web page. Each variant maps to a failure mode of a single
//! outbound GET; all of them surface to the client as a JSON-RPC error
//! envelope with a descriptive message.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while scraping a page.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Error when the URL cannot be parsed or uses an unsupported scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Error when the request times out.
    #[error("Request timeout after {0:?}")]
    RequestTimeout(Duration),

    /// Error when the connection cannot be established.
    #[error("Connection failed: {0}")]
    ConnectError(String),

    /// Error when the response has a non-success status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code
        status: u16,
        /// The canonical reason phrase, or the status code text
        message: String,
    },

    /// Error when the response body cannot be read.
    #[error("Failed to read response body: {0}")]
    BodyReadError(String),

    /// Other scrape errors.
    #[error("Scrape error: {0}")]
    Other(String),
}
