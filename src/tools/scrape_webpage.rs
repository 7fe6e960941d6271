//! The `scrape_webpage` tool.
//!
//! Fetches a page and returns the extraction result (title, description,
//! text, HTML, timestamp) as one pretty-printed JSON text block.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{required_url, ToolHandler};
use crate::protocol::jsonrpc::error::JsonRpcError;
use crate::protocol::jsonrpc::methods::tools_call::CallToolResult;
use crate::protocol::jsonrpc::methods::tools_list::ToolDescriptor;
use crate::scraper::PageScraper;

/// Tool returning the structured extraction of a web page.
pub struct ScrapeWebpageTool {
    scraper: Arc<dyn PageScraper>,
}

impl ScrapeWebpageTool {
    /// Creates the tool over a scraper handle.
    pub fn new(scraper: Arc<dyn PageScraper>) -> Self {
        Self { scraper }
    }
}

#[async_trait]
impl ToolHandler for ScrapeWebpageTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "scrape_webpage".to_string(),
            description:
                "Extract content from a web page including title, description, and text content"
                    .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "The URL of the web page to scrape"
                    }
                },
                "required": ["url"]
            }),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult, JsonRpcError> {
        let url = required_url(&arguments)?;
        let page = self.scraper.scrape(&url).await?;
        let text = serde_json::to_string_pretty(&page)?;
        Ok(CallToolResult::text(text))
    }
}
