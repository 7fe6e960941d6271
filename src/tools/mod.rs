//! Tool implementations exposed over `tools/list` and `tools/call`.
//!
//! Tools are registered once at startup into a [`ToolRegistry`], which is
//! then moved into the dispatcher and never mutated again. Registration
//! order is the catalog order clients see.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::protocol::jsonrpc::error::JsonRpcError;
use crate::protocol::jsonrpc::methods::tools_call::CallToolResult;
use crate::protocol::jsonrpc::methods::tools_list::ToolDescriptor;
use crate::scraper::PageScraper;

pub mod fetch_html;
pub mod scrape_webpage;

pub use fetch_html::FetchHtmlTool;
pub use scrape_webpage::ScrapeWebpageTool;

/// A named, schema-described callable capability.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// The descriptor advertised via tools/list.
    fn descriptor(&self) -> ToolDescriptor;

    /// Executes the tool with the given arguments.
    async fn execute(&self, arguments: Value) -> Result<CallToolResult, JsonRpcError>;
}

/// Ordered, immutable collection of tools.
///
/// Mutable only through `register` during startup; once handed to the
/// dispatcher no further registration happens.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool at the end of the catalog.
    pub fn register<T: ToolHandler + 'static>(&mut self, tool: T) {
        self.tools.push(Arc::new(tool));
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        self.tools
            .iter()
            .find(|tool| tool.descriptor().name == name)
            .map(Arc::clone)
    }

    /// Descriptors of all registered tools, in registration order.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|tool| tool.descriptor()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Builds the registry with the standard web tools, in catalog order.
pub fn standard_registry(scraper: Arc<dyn PageScraper>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(ScrapeWebpageTool::new(Arc::clone(&scraper)));
    registry.register(FetchHtmlTool::new(scraper));
    registry
}

/// Extracts the required `url` argument common to the web tools.
pub(crate) fn required_url(arguments: &Value) -> Result<String, JsonRpcError> {
    arguments
        .get("url")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(String::from)
        .ok_or_else(|| JsonRpcError::internal("URL is required"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_url_present() {
        let arguments = json!({"url": "https://example.com"});
        assert_eq!(required_url(&arguments).unwrap(), "https://example.com");
    }

    #[test]
    fn test_required_url_missing_or_blank() {
        for arguments in [json!({}), json!({"url": ""}), json!({"url": "   "}), json!({"url": 42})] {
            let error = required_url(&arguments).unwrap_err();
            assert_eq!(error.message, "URL is required");
        }
    }
}
