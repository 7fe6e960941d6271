// Copyright (c) 2025 Makai MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! JSON-RPC 2.0 protocol layer for the Makai MCP Server.
//!
//! This module implements the newline-delimited JSON-RPC channel the server
//! speaks on stdio: re-framing an unbounded byte stream into discrete
//! messages, dispatching each message to its method handler, and writing
//! one response envelope per line.
//!
//! # Components
//!
//! - [`framer::MessageFramer`]: chunk accumulation and newline splitting,
//!   with a cap on unterminated input
//! - [`dispatcher::RequestDispatcher`]: parse, route, and envelope
//!   construction; the single point where handler failures become wire
//!   errors
//! - [`writer::ResponseWriter`]: atomic line-per-envelope output
//!
//! Messages are processed independently: a malformed or failing message
//! never desynchronizes the stream or affects other in-flight requests.

pub mod dispatcher;
pub mod error;
pub mod framer;
pub mod methods;
pub mod types;
pub mod writer;

// Re-exports
pub use dispatcher::RequestDispatcher;
pub use error::{ErrorCode, JsonRpcError, MethodResult};
pub use framer::MessageFramer;
pub use types::{Id, Request, Response};
pub use writer::ResponseWriter;
