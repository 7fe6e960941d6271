//! Transport error module.
//!
//! This module defines error types that may occur in the stdio transport.

use std::io;
use thiserror::Error;

/// Errors that can occur during transport operations.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Error when reading from standard input.
    #[error("Standard input read error: {0}")]
    StdioReadError(#[from] io::Error),

    /// Error when writing to standard output.
    #[error("Standard output write error: {0}")]
    StdioWriteError(String),

    /// Error when serializing a response envelope for the wire.
    #[error("Response serialization error: {0}")]
    SerializeError(String),
}
