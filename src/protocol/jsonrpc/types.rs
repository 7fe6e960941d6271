// Copyright (c) 2025 Makai MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Types for the JSON-RPC 2.0 protocol.
//!
//! This module defines the request and response envelope structures used on
//! the wire. Requests without an `id` are notifications; their response
//! envelopes carry no `id` either, since correlation is not defined for
//! them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::JsonRpcError;

/// JSON-RPC request identifier.
///
/// Can be a string or a number. A request without an identifier is a
/// notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Id {
    /// String identifier
    String(String),

    /// Numeric identifier
    Number(i64),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::String(s) => write!(f, "{}", s),
            Id::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A JSON-RPC 2.0 request object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Request {
    /// JSON-RPC protocol version, normally "2.0"
    #[serde(default = "default_version")]
    pub jsonrpc: String,

    /// Name of the method to be invoked
    pub method: String,

    /// Method parameters, positional (array) or named (object)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,

    /// Request identifier; absent for notifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
}

fn default_version() -> String {
    "2.0".to_string()
}

impl Request {
    /// Creates a new JSON-RPC 2.0 request.
    pub fn new(method: impl Into<String>, params: Option<serde_json::Value>, id: Option<Id>) -> Self {
        Self {
            jsonrpc: default_version(),
            method: method.into(),
            params,
            id,
        }
    }

    /// Returns true if this request is a notification (no id).
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// A JSON-RPC 2.0 response envelope.
///
/// Contains either a result or an error, never both. The `id` echoes the
/// request's id and is omitted from serialization when the request was a
/// notification.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Response {
    /// JSON-RPC protocol version, always "2.0"
    pub jsonrpc: String,

    /// Same identifier as the request this is responding to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,

    /// The result of the method invocation, if successful
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,

    /// The error object, if the invocation failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl Response {
    /// Creates a successful JSON-RPC 2.0 response.
    pub fn success(id: Option<Id>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Creates an error JSON-RPC 2.0 response.
    pub fn error(id: Option<Id>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }

    /// Returns true if this response contains a successful result.
    pub fn is_success(&self) -> bool {
        self.result.is_some() && self.error.is_none()
    }

    /// Returns true if this response contains an error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_version_defaults() {
        let request: Request =
            serde_json::from_str(r#"{"method": "initialize", "id": 7}"#).unwrap();
        assert_eq!(request.jsonrpc, "2.0");
        assert_eq!(request.id, Some(Id::Number(7)));
    }

    #[test]
    fn test_string_and_number_ids() {
        let by_number: Request =
            serde_json::from_str(r#"{"method": "m", "id": 42}"#).unwrap();
        assert_eq!(by_number.id, Some(Id::Number(42)));

        let by_string: Request =
            serde_json::from_str(r#"{"method": "m", "id": "req-1"}"#).unwrap();
        assert_eq!(by_string.id, Some(Id::String("req-1".to_string())));
    }

    #[test]
    fn test_result_and_error_are_exclusive() {
        let success = Response::success(Some(Id::Number(1)), json!(19));
        assert!(success.is_success());
        assert!(!success.is_error());

        let failure = Response::error(Some(Id::Number(1)), JsonRpcError::internal("oops"));
        assert!(failure.is_error());
        assert!(!failure.is_success());
        assert!(failure.result.is_none());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(Id::String("abc".to_string()).to_string(), "abc");
        assert_eq!(Id::Number(123).to_string(), "123");
    }
}
