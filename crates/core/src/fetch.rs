//! Article fetching over HTTP.
//!
//! Retrieves HTML and reduces pages to their visible paragraph text. Any
//! failure along the way (invalid URL, network error, timeout, bad body)
//! surfaces as an `Err` the batch orchestrator treats as a failed document:
//! the row is skipped and the batch continues.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::parse::Document;
use crate::{MensuraError, Result};

/// HTTP settings shared by every request in a batch.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Mensura/1.0; +https://github.com/stormlightlabs/mensura)".to_string(),
        }
    }
}

/// HTTP fetcher with a client reused across an entire batch.
///
/// One [`reqwest::Client`] serves all rows, so sequential requests to the
/// same host reuse pooled connections.
#[derive(Debug)]
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    /// Creates a fetcher with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(MensuraError::HttpError)?;

        Ok(Self { client, config })
    }

    /// Performs an HTTP GET and returns the response body as text.
    ///
    /// Redirects are followed and a browser-like header set is sent for
    /// compatibility with sites that reject bare clients. Timeouts map to
    /// [`MensuraError::Timeout`]; every other transport failure maps to
    /// [`MensuraError::HttpError`].
    pub async fn fetch_url(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|e| MensuraError::InvalidUrl(e.to_string()))?;

        if parsed.scheme().is_empty() {
            return Err(MensuraError::InvalidUrl(
                "URL must include a scheme (http:// or https://)".to_string(),
            ));
        }

        let response = self
            .client
            .get(parsed)
            .header("User-Agent", &self.config.user_agent)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MensuraError::Timeout { timeout: self.config.timeout }
                } else {
                    MensuraError::HttpError(e)
                }
            })?;

        Ok(response.text().await?)
    }

    /// Fetches a URL and extracts its visible paragraph text.
    ///
    /// The extracted string may be empty for pages without `<p>` elements;
    /// an empty document is still a successful fetch.
    pub async fn fetch_article_text(&self, url: &str) -> Result<String> {
        let html = self.fetch_url(url).await?;
        Document::parse(&html).paragraph_text()
    }
}
