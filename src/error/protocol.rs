//! Protocol error module.
//!
//! This module defines error types that may occur during JSON-RPC framing.
//! Dispatch-level failures never surface here; they become wire error
//! envelopes in the dispatcher instead.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Error when unterminated input exceeds the pending-bytes threshold.
    #[error("Pending input exceeds maximum allowed: {size} > {max_size}")]
    PendingBufferOverflow {
        /// Bytes currently buffered without a terminating newline
        size: usize,
        /// The configured maximum in bytes
        max_size: usize,
    },
}
