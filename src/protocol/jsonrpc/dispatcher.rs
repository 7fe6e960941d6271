// Copyright (c) 2025 Makai MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! JSON-RPC request dispatch.
//!
//! [`RequestDispatcher`] turns one complete message line into at most one
//! response envelope. Protocol methods are matched structurally; tool
//! methods resolve against the immutable [`ToolRegistry`] handed in at
//! construction. Handler results, including scrape failures, are converted
//! to the wire envelope here and nowhere else; nothing past the dispatch
//! boundary can crash the process or desynchronize the stream.

use serde_json::Value;
use tracing::{debug, warn};

use super::error::{JsonRpcError, MethodResult};
use super::methods;
use super::types::{Id, Request, Response};
use crate::tools::ToolRegistry;

/// Routes parsed JSON-RPC messages to their method handlers.
pub struct RequestDispatcher {
    tools: ToolRegistry,
}

impl RequestDispatcher {
    /// Creates a dispatcher over a fully populated tool registry.
    pub fn new(tools: ToolRegistry) -> Self {
        Self { tools }
    }

    /// Dispatches one complete message line.
    ///
    /// Returns `None` only when the line is not valid JSON: with no
    /// request id to correlate to, the malformed message is discarded and
    /// the failure goes to the diagnostic channel instead of stdout. Every
    /// other outcome, including an unknown method or a failed handler,
    /// produces exactly one envelope.
    pub async fn dispatch(&self, message_text: &str) -> Option<Response> {
        let value: Value = match serde_json::from_str(message_text) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "Discarding malformed JSON-RPC message");
                return None;
            }
        };

        // Recover the id before strict parsing so a structurally invalid
        // request still correlates to its envelope.
        let id = value
            .get("id")
            .and_then(|raw| serde_json::from_value::<Id>(raw.clone()).ok());

        let request: Request = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(error) => {
                return Some(Response::error(
                    id,
                    JsonRpcError::internal(format!("Invalid request: {error}")),
                ));
            }
        };

        debug!(method = %request.method, id = ?request.id, "Dispatching request");
        let result = self.handle(&request).await;

        Some(match result {
            Ok(value) => Response::success(request.id, value),
            Err(error) => Response::error(request.id, error),
        })
    }

    async fn handle(&self, request: &Request) -> MethodResult {
        match request.method.as_str() {
            "initialize" => methods::initialize::handle(),
            "tools/list" => methods::tools_list::handle(&self.tools),
            "tools/call" => methods::tools_call::handle(&self.tools, request.params.clone()).await,
            other => Err(JsonRpcError::unknown_method(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dispatcher() -> RequestDispatcher {
        RequestDispatcher::new(ToolRegistry::new())
    }

    #[tokio::test]
    async fn test_malformed_json_produces_no_response() {
        assert!(dispatcher().dispatch("not json").await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_method_envelope() {
        let response = dispatcher()
            .dispatch(r#"{"jsonrpc":"2.0","id":7,"method":"frobnicate"}"#)
            .await
            .unwrap();

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "id": 7,
                "error": {"code": -32603, "message": "Unknown method: frobnicate"}
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_method_notification_envelope_has_no_id() {
        let response = dispatcher()
            .dispatch(r#"{"jsonrpc":"2.0","method":"frobnicate"}"#)
            .await
            .unwrap();

        assert!(response.is_error());
        assert!(response.id.is_none());
    }

    #[tokio::test]
    async fn test_missing_method_correlates_recovered_id() {
        let response = dispatcher()
            .dispatch(r#"{"jsonrpc":"2.0","id":"req-9","params":{}}"#)
            .await
            .unwrap();

        assert_eq!(response.id, Some(Id::String("req-9".to_string())));
        let error = response.error.unwrap();
        assert_eq!(error.code, -32603);
        assert!(error.message.starts_with("Invalid request"));
    }

    #[tokio::test]
    async fn test_initialize_round_trip() {
        let response = dispatcher()
            .dispatch(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#)
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(response.id, Some(Id::Number(1)));
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let response = dispatcher()
            .dispatch(
                r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"nope","arguments":{}}}"#,
            )
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, -32603);
        assert_eq!(error.message, "Unknown tool: nope");
    }
}
