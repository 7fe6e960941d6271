// Copyright (c) 2025 Makai MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the JSON-RPC 2.0 wire protocol.
//!
//! The standard error codes are defined for completeness; on the wire this
//! server reports every handler or protocol failure with the internal-error
//! code (-32603) and a human-readable message, which is the shape the
//! calling client expects.

use serde::{Deserialize, Serialize};

use crate::error::scrape::ScrapeError;

/// Standard JSON-RPC 2.0 error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Parse error (-32700)
    /// Invalid JSON was received by the server.
    ParseError = -32700,

    /// Invalid Request (-32600)
    /// The JSON sent is not a valid Request object.
    InvalidRequest = -32600,

    /// Method not found (-32601)
    /// The method does not exist / is not available.
    MethodNotFound = -32601,

    /// Invalid params (-32602)
    /// Invalid method parameter(s).
    InvalidParams = -32602,

    /// Internal error (-32603)
    /// Internal JSON-RPC error.
    InternalError = -32603,
}

impl ErrorCode {
    /// Returns a string description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::ParseError => "Parse error",
            ErrorCode::InvalidRequest => "Invalid Request",
            ErrorCode::MethodNotFound => "Method not found",
            ErrorCode::InvalidParams => "Invalid params",
            ErrorCode::InternalError => "Internal error",
        }
    }

    /// Returns the integer error code.
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> i32 {
        code as i32
    }
}

/// JSON-RPC error object as carried inside a response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// The error code
    pub code: i32,

    /// A short description of the error
    pub message: String,
}

impl JsonRpcError {
    /// Creates a new JSON-RPC error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
        }
    }

    /// Creates an internal error (-32603) with the given message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Error for a method name with no registered handler.
    pub fn unknown_method(method: &str) -> Self {
        Self::internal(format!("Unknown method: {method}"))
    }

    /// Error for a tools/call naming a tool that does not exist.
    pub fn unknown_tool(name: &str) -> Self {
        Self::internal(format!("Unknown tool: {name}"))
    }
}

impl From<ScrapeError> for JsonRpcError {
    fn from(error: ScrapeError) -> Self {
        Self::internal(error.to_string())
    }
}

impl From<serde_json::Error> for JsonRpcError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(error.to_string())
    }
}

/// Result type returned by method handlers; the dispatcher converts it to a
/// response envelope at one single point.
pub type MethodResult = Result<serde_json::Value, JsonRpcError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ParseError.code(), -32700);
        assert_eq!(ErrorCode::InvalidRequest.code(), -32600);
        assert_eq!(ErrorCode::MethodNotFound.code(), -32601);
        assert_eq!(ErrorCode::InvalidParams.code(), -32602);
        assert_eq!(ErrorCode::InternalError.code(), -32603);
    }

    #[test]
    fn test_error_code_descriptions() {
        assert_eq!(ErrorCode::ParseError.description(), "Parse error");
        assert_eq!(ErrorCode::InternalError.description(), "Internal error");
    }

    #[test]
    fn test_unknown_method_message() {
        let error = JsonRpcError::unknown_method("frobnicate");
        assert_eq!(error.code, -32603);
        assert_eq!(error.message, "Unknown method: frobnicate");
    }

    #[test]
    fn test_unknown_tool_message() {
        let error = JsonRpcError::unknown_tool("launch_missiles");
        assert_eq!(error.code, -32603);
        assert_eq!(error.message, "Unknown tool: launch_missiles");
    }

    #[test]
    fn test_scrape_error_conversion() {
        let error: JsonRpcError = ScrapeError::RequestTimeout(Duration::from_secs(10)).into();
        assert_eq!(error.code, -32603);
        assert!(error.message.contains("timeout"));

        let error: JsonRpcError = ScrapeError::HttpStatus {
            status: 404,
            message: "Not Found".to_string(),
        }
        .into();
        assert_eq!(error.code, -32603);
        assert!(error.message.contains("404"));
    }
}
