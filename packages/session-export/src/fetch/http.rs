//! HTTP page source backed by reqwest.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};

use super::PageSource;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("session-export/", env!("CARGO_PKG_VERSION"));

/// Fetches pages with a plain GET. No auth, no retries.
pub struct HttpPageSource {
    client: reqwest::Client,
}

impl HttpPageSource {
    /// Create a source with a 30 second request timeout.
    pub fn new() -> FetchResult<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a source with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// Use a preconfigured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_html(&self, url: &str) -> FetchResult<String> {
        debug!(url = %url, "HTTP fetch starting");
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            FetchError::Http {
                url: url.to_string(),
                source: Box::new(e),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "HTTP error status");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Http {
            url: url.to_string(),
            source: Box::new(e),
        })?;

        debug!(url = %url, bytes = body.len(), "HTTP fetch complete");
        Ok(body)
    }
}
