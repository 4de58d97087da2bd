//! Page sources.
//!
//! A [`PageSource`] turns a URL into an HTML body. The pipeline fetches every
//! body before parsing any of them, so parsed documents never cross an await
//! point.

pub mod http;
pub mod mock;

use async_trait::async_trait;

use crate::error::FetchResult;

pub use http::HttpPageSource;
pub use mock::MockPageSource;

/// Source of raw HTML pages.
///
/// Implementations:
/// - [`HttpPageSource`] - live HTTP GET
/// - [`MockPageSource`] - canned bodies for tests
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the body at `url`.
    ///
    /// Any transport failure or non-success status is an error; there is no
    /// retry.
    async fn fetch_html(&self, url: &str) -> FetchResult<String>;
}
