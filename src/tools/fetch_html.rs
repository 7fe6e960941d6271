//! The `fetch_html` tool.
//!
//! Fetches a page and returns its raw HTML as one text block, without any
//! extraction.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{required_url, ToolHandler};
use crate::protocol::jsonrpc::error::JsonRpcError;
use crate::protocol::jsonrpc::methods::tools_call::CallToolResult;
use crate::protocol::jsonrpc::methods::tools_list::ToolDescriptor;
use crate::scraper::PageScraper;

/// Tool returning the raw HTML of a web page.
pub struct FetchHtmlTool {
    scraper: Arc<dyn PageScraper>,
}

impl FetchHtmlTool {
    /// Creates the tool over a scraper handle.
    pub fn new(scraper: Arc<dyn PageScraper>) -> Self {
        Self { scraper }
    }
}

#[async_trait]
impl ToolHandler for FetchHtmlTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "fetch_html".to_string(),
            description: "Fetch the raw HTML content of a web page".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "The URL of the web page to fetch"
                    }
                },
                "required": ["url"]
            }),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult, JsonRpcError> {
        let url = required_url(&arguments)?;
        let page = self.scraper.scrape(&url).await?;
        Ok(CallToolResult::text(page.html_content))
    }
}
