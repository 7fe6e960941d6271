//! Test modules for the Makai MCP Server.
//!
//! This module contains cross-module tests:
//! - Configuration loading and validation
//! - Error type conversions and display
//!
//! Component-level tests live next to the code they test; end-to-end
//! framing/dispatch scenarios live in the `tests/` directory.

pub mod config_tests;
