// Copyright (c) 2025 Makai MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the JSON-RPC "tools/call" method handler.
//!
//! Resolves `params.name` against the tool registry and invokes the tool
//! with `params.arguments`. Tool output is wrapped as text-typed content
//! blocks, which is the shape the calling client expects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::protocol::jsonrpc::error::{JsonRpcError, MethodResult};
use crate::tools::ToolRegistry;

/// Parameters of a tools/call request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallToolParams {
    /// Name of the tool to invoke
    pub name: String,

    /// Tool arguments; an absent field is treated as an empty object
    #[serde(default = "empty_arguments")]
    pub arguments: Value,
}

fn empty_arguments() -> Value {
    Value::Object(serde_json::Map::new())
}

/// One block of tool output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolContent {
    /// Content discriminator; this server only produces "text"
    #[serde(rename = "type")]
    pub content_type: String,

    /// The content payload
    pub text: String,
}

impl ToolContent {
    /// Creates a text-typed content block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Result of a tools/call invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolResult {
    /// Output content blocks
    pub content: Vec<ToolContent>,
}

impl CallToolResult {
    /// Creates a result with a single text content block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::text(text)],
        }
    }
}

/// Handles the tools/call method call.
pub async fn handle(registry: &ToolRegistry, params: Option<Value>) -> MethodResult {
    let params = params.ok_or_else(|| JsonRpcError::internal("Missing tools/call params"))?;
    let params: CallToolParams = serde_json::from_value(params)
        .map_err(|e| JsonRpcError::internal(format!("Invalid tools/call params: {e}")))?;

    let tool = registry
        .get(&params.name)
        .ok_or_else(|| JsonRpcError::unknown_tool(&params.name))?;

    let result = tool.execute(params.arguments).await?;
    Ok(serde_json::to_value(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_tool_result_shape() {
        let result = CallToolResult::text("hello");
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"content": [{"type": "text", "text": "hello"}]})
        );
    }

    #[test]
    fn test_params_default_arguments() {
        let params: CallToolParams =
            serde_json::from_value(serde_json::json!({"name": "fetch_html"})).unwrap();
        assert_eq!(params.name, "fetch_html");
        assert!(params.arguments.as_object().unwrap().is_empty());
    }
}
