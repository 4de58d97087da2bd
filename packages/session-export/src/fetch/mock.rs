//! Mock page source for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};

use super::PageSource;

/// Serves canned bodies by URL and records every request.
///
/// # Example
///
/// ```rust
/// use session_export::fetch::MockPageSource;
///
/// let source = MockPageSource::new()
///     .with_page("http://example.com/program", "<div class=\"session\"></div>");
/// assert_eq!(source.call_count(), 0);
/// ```
#[derive(Default, Clone)]
pub struct MockPageSource {
    pages: Arc<RwLock<HashMap<String, String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page that will be returned for `url`.
    pub fn add_page(&self, url: impl Into<String>, body: impl Into<String>) {
        self.pages.write().unwrap().insert(url.into(), body.into());
    }

    /// Builder form of [`add_page`](Self::add_page).
    pub fn with_page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.add_page(url, body);
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl PageSource for MockPageSource {
    async fn fetch_html(&self, url: &str) -> FetchResult<String> {
        self.calls.write().unwrap().push(url.to_string());

        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                url: url.to_string(),
            })
    }
}
