//! Stdio server loop.
//!
//! Reads raw chunks from the input stream, frames them into messages, and
//! spawns one dispatch task per message. Handlers therefore run
//! concurrently with framing; responses appear on the output in the order
//! handlers complete, correlated by id. The loop itself only ends on EOF,
//! an input read error, or a pending-buffer overflow, and in every case
//! drains in-flight handlers before returning.

use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::config::server::ServerConfig;
use crate::error::{MakaiError, MakaiResult};
use crate::protocol::jsonrpc::{MessageFramer, RequestDispatcher, ResponseWriter};

/// The MCP server: framing loop plus dispatch fan-out.
pub struct McpServer {
    dispatcher: Arc<RequestDispatcher>,
    max_pending_bytes: usize,
    read_chunk_bytes: usize,
}

impl McpServer {
    /// Creates a server over a fully constructed dispatcher.
    pub fn new(dispatcher: RequestDispatcher, config: &ServerConfig) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            max_pending_bytes: config.max_pending_bytes,
            read_chunk_bytes: config.read_chunk_bytes,
        }
    }

    /// Runs the server on stdin/stdout until EOF.
    pub async fn run(&self) -> MakaiResult<()> {
        self.run_with(tokio::io::stdin(), ResponseWriter::stdout())
            .await
    }

    /// Runs the server over arbitrary streams.
    pub async fn run_with<R, W>(&self, mut input: R, writer: ResponseWriter<W>) -> MakaiResult<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        info!("Server started, reading messages");

        let mut framer = MessageFramer::new(self.max_pending_bytes);
        let mut chunk = vec![0u8; self.read_chunk_bytes];
        let mut in_flight = JoinSet::new();

        let result = loop {
            let n = match input.read(&mut chunk).await {
                Ok(0) => {
                    debug!("EOF on input, shutting down");
                    break Ok(());
                }
                Ok(n) => n,
                Err(e) => break Err(MakaiError::Transport(e.into())),
            };

            let messages = match framer.feed(&chunk[..n]) {
                Ok(messages) => messages,
                Err(e) => {
                    error!(error = %e, "Closing connection");
                    break Err(MakaiError::Protocol(e));
                }
            };

            for message in messages {
                let dispatcher = Arc::clone(&self.dispatcher);
                let writer = writer.clone();
                in_flight.spawn(async move {
                    if let Some(response) = dispatcher.dispatch(&message).await {
                        if let Err(e) = writer.write(&response).await {
                            error!(error = %e, "Failed to write response");
                        }
                    }
                });
            }
        };

        // Let in-flight handlers run to completion before tearing down.
        while in_flight.join_next().await.is_some() {}
        info!("Server stopped");

        result
    }
}
