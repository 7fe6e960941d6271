//! Protocol module for the Makai MCP Server.
//!
//! Contains the JSON-RPC 2.0 message layer (framing, dispatch, response
//! writing) and the stdio server loop that ties them together.

pub mod jsonrpc;
pub mod server;
