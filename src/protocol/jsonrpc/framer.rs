// Copyright (c) 2025 Makai MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Newline framing for the stdio JSON-RPC stream.
//!
//! Input arrives as arbitrary chunks with no alignment to message
//! boundaries. [`MessageFramer`] accumulates chunks and yields complete
//! newline-terminated messages in arrival order, retaining any trailing
//! incomplete fragment for the next feed. Splitting happens at the byte
//! level so a UTF-8 sequence cut across two chunks is reassembled intact.
//!
//! Unterminated input is bounded: once the retained fragment exceeds the
//! configured pending-bytes threshold, `feed` fails and the connection is
//! expected to close rather than grow the buffer indefinitely.

use crate::error::protocol::ProtocolError;

/// Re-frames a chunked byte stream into newline-delimited messages.
#[derive(Debug)]
pub struct MessageFramer {
    buffer: Vec<u8>,
    max_pending_bytes: usize,
}

impl MessageFramer {
    /// Creates a framer with the given cap on unterminated input.
    pub fn new(max_pending_bytes: usize) -> Self {
        Self {
            buffer: Vec::new(),
            max_pending_bytes,
        }
    }

    /// Feeds one input chunk and returns the complete messages it finishes.
    ///
    /// Messages are returned in the order their terminating newline appears
    /// in the stream. Segments that are empty or whitespace-only after
    /// trimming are dropped silently; they carry keep-alive blank lines,
    /// not messages. Surrounding whitespace (including a CR from CRLF
    /// endings) is stripped from each returned message.
    ///
    /// # Errors
    ///
    /// Fails with [`ProtocolError::PendingBufferOverflow`] when the
    /// retained fragment exceeds the configured maximum. Messages framed
    /// by the overflowing chunk are never lost: if the same chunk also
    /// completed messages, those are returned and the overflow surfaces on
    /// the next call, before any further input is consumed.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<String>, ProtocolError> {
        if self.buffer.len() > self.max_pending_bytes {
            return Err(self.overflow());
        }

        self.buffer.extend_from_slice(chunk);

        let mut messages = Vec::new();
        let mut consumed = 0;
        while let Some(offset) = self.buffer[consumed..].iter().position(|&b| b == b'\n') {
            let segment = &self.buffer[consumed..consumed + offset];
            let text = String::from_utf8_lossy(segment);
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                messages.push(trimmed.to_string());
            }
            consumed += offset + 1;
        }
        self.buffer.drain(..consumed);

        if self.buffer.len() > self.max_pending_bytes && messages.is_empty() {
            return Err(self.overflow());
        }

        Ok(messages)
    }

    fn overflow(&self) -> ProtocolError {
        ProtocolError::PendingBufferOverflow {
            size: self.buffer.len(),
            max_size: self.max_pending_bytes,
        }
    }

    /// Number of buffered bytes not yet resolved into a complete message.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}
