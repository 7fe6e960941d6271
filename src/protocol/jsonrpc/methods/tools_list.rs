// Copyright (c) 2025 Makai MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the JSON-RPC "tools/list" method handler.
//!
//! Returns the catalog of available tools so clients can discover what
//! they may call. The catalog is derived from the immutable registry, in
//! registration order, and is therefore identical on every call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::protocol::jsonrpc::error::MethodResult;
use crate::tools::ToolRegistry;

/// A tool as advertised to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Unique tool name, used as the `tools/call` identifier
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON-Schema-shaped contract for the tool's arguments
    pub input_schema: Value,
}

/// Result of the tools/list method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsListResult {
    /// Available tools, in registration order
    pub tools: Vec<ToolDescriptor>,
}

/// Handles the tools/list method call.
pub fn handle(registry: &ToolRegistry) -> MethodResult {
    let result = ToolsListResult {
        tools: registry.descriptors(),
    };

    Ok(serde_json::to_value(result)?)
}
