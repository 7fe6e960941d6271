// Copyright (c) 2025 Makai MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Response writing for the stdio JSON-RPC stream.
//!
//! Responses are emitted in the order handlers complete, not the order
//! requests arrived, so the sink is shared between concurrent dispatch
//! tasks. Each envelope is serialized into a single buffer (JSON plus the
//! terminating newline) and written with one `write_all` while the sink
//! lock is held, so two envelopes can never interleave on the stream.

use std::sync::Arc;

use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::Mutex;
use tracing::trace;

use super::types::Response;
use crate::error::transport::TransportError;

/// Serializes response envelopes onto a shared line-delimited sink.
#[derive(Debug)]
pub struct ResponseWriter<W> {
    sink: Arc<Mutex<W>>,
}

impl ResponseWriter<Stdout> {
    /// Creates a writer over the process's standard output.
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin + Send> ResponseWriter<W> {
    /// Creates a writer over an arbitrary sink.
    pub fn new(sink: W) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
        }
    }

    /// Creates a writer over a sink shared with the caller, letting tests
    /// inspect what was written.
    pub fn from_shared(sink: Arc<Mutex<W>>) -> Self {
        Self { sink }
    }

    /// Writes one envelope as a single newline-terminated line.
    pub async fn write(&self, response: &Response) -> Result<(), TransportError> {
        let mut line = serde_json::to_string(response)
            .map_err(|e| TransportError::SerializeError(e.to_string()))?;
        line.push('\n');
        trace!(line = line.trim_end(), "Sending response");

        let mut sink = self.sink.lock().await;
        sink.write_all(line.as_bytes())
            .await
            .map_err(|e| TransportError::StdioWriteError(e.to_string()))?;
        sink.flush()
            .await
            .map_err(|e| TransportError::StdioWriteError(e.to_string()))?;
        Ok(())
    }
}

impl<W> Clone for ResponseWriter<W> {
    fn clone(&self) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
        }
    }
}
