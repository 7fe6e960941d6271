//! Web-page fetching and content extraction.
//!
//! [`WebScraper`] performs one outbound GET per call and derives title,
//! meta description, and plain text from the returned HTML. The
//! [`PageScraper`] trait is the seam the protocol layer depends on, so
//! dispatch can be tested against a stub without any network. The scraper
//! is constructed explicitly at startup and owned by the tools that use
//! it; there is no lazily initialized global instance.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::http::HttpClientConfig;
use crate::error::scrape::ScrapeError;

pub mod extract;
pub mod fetch;

pub use fetch::HttpFetcher;

/// The extraction result for one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// The URL that was fetched
    pub url: String,

    /// Contents of the `<title>` element, empty if absent
    pub title: String,

    /// Contents of the description meta tag, empty if absent
    pub description: String,

    /// Plain text with markup, scripts, and styles stripped
    pub text_content: String,

    /// The raw HTML as received
    pub html_content: String,

    /// When the page was fetched (UTC, ISO-8601 on the wire)
    pub timestamp: DateTime<Utc>,
}

/// A component that can turn a URL into a [`PageResult`].
#[async_trait]
pub trait PageScraper: Send + Sync {
    /// Fetches and extracts a single page.
    async fn scrape(&self, url: &str) -> Result<PageResult, ScrapeError>;
}

/// The production scraper: HTTP fetch plus regex extraction.
pub struct WebScraper {
    fetcher: HttpFetcher,
}

impl WebScraper {
    /// Builds the scraper and its HTTP client from configuration.
    pub fn new(config: &HttpClientConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            fetcher: HttpFetcher::new(config)?,
        })
    }
}

#[async_trait]
impl PageScraper for WebScraper {
    async fn scrape(&self, url: &str) -> Result<PageResult, ScrapeError> {
        let html = self.fetcher.fetch(url).await?;

        Ok(PageResult {
            url: url.to_string(),
            title: extract::title(&html),
            description: extract::meta_description(&html),
            text_content: extract::text(&html),
            html_content: html,
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_result_wire_shape() {
        let page = PageResult {
            url: "https://example.com/".to_string(),
            title: "Example".to_string(),
            description: "An example page".to_string(),
            text_content: "Example text".to_string(),
            html_content: "<html></html>".to_string(),
            timestamp: Utc::now(),
        };

        let value = serde_json::to_value(&page).unwrap();
        assert!(value.get("textContent").is_some());
        assert!(value.get("htmlContent").is_some());
        assert!(value.get("text_content").is_none());

        // chrono serializes as RFC 3339 / ISO-8601
        let timestamp = value["timestamp"].as_str().unwrap();
        assert!(timestamp.contains('T'));
        assert!(timestamp.ends_with('Z') || timestamp.contains('+'));
    }
}
