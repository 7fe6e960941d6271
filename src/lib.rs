//! Makai MCP Server Library
//!
//! This library contains the core components of the Makai MCP Server: the
//! newline-delimited JSON-RPC protocol layer (framing, dispatch, response
//! writing), the stdio server loop, the web-page scraping tools, and the
//! configuration system. The library is designed to be used by the binary
//! crate, but can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - Strict component boundaries: the protocol layer depends on the
//!   scraping subsystem only through the `PageScraper` trait
//! - Explicit ownership: the scraper, registry, and dispatcher are
//!   constructed once at startup and passed down, never reached through
//!   globals
//! - Errors are values end to end; handler failures become wire envelopes
//!   at a single point in the dispatcher
//! - stdout carries only protocol lines; diagnostics go to stderr

// Re-export public modules
pub mod config;
pub mod error;
pub mod protocol;
pub mod scraper;
pub mod tools;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Makai MCP Server.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
