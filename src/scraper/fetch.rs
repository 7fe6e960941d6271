//! Outbound HTTP fetching.
//!
//! One GET per scrape: no retries, no caching. The client enforces the
//! configured request timeout, so a hung remote fails that one call
//! without affecting other in-flight work.

use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::http::HttpClientConfig;
use crate::error::scrape::ScrapeError;

/// HTTP client wrapper for page fetches.
pub struct HttpFetcher {
    client: Client,
    request_timeout: Duration,
}

impl HttpFetcher {
    /// Builds the underlying client from configuration.
    pub fn new(config: &HttpClientConfig) -> Result<Self, ScrapeError> {
        let request_timeout = Duration::from_millis(config.request_timeout_ms);
        let redirect = if config.follow_redirects {
            Policy::limited(config.max_redirects)
        } else {
            Policy::none()
        };

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(request_timeout)
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .redirect(redirect)
            .build()
            .map_err(|e| ScrapeError::Other(e.to_string()))?;

        Ok(Self {
            client,
            request_timeout,
        })
    }

    /// Fetches one page and returns its body.
    ///
    /// Fails on unparseable or non-http(s) URLs, connection errors,
    /// timeouts, and non-2xx statuses.
    pub async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let parsed = Url::parse(url).map_err(|e| ScrapeError::InvalidUrl(format!("{url}: {e}")))?;
        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ScrapeError::InvalidUrl(format!(
                    "unsupported scheme: {scheme}"
                )))
            }
        }

        debug!(url = %parsed, "Fetching page");
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ScrapeError::BodyReadError(e.to_string()))
    }

    fn classify(&self, error: reqwest::Error) -> ScrapeError {
        if error.is_timeout() {
            ScrapeError::RequestTimeout(self.request_timeout)
        } else if error.is_connect() {
            ScrapeError::ConnectError(error.to_string())
        } else {
            ScrapeError::Other(error.to_string())
        }
    }
}
