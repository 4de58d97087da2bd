//! Typed errors for the session export library.
//!
//! Uses `thiserror` for library errors (not `anyhow`); the binary wraps
//! these with context at each stage.

use thiserror::Error;

/// Errors that can occur while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// HTTP transport failed (DNS, connect, timeout, body read)
    #[error("HTTP error fetching {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// No canned page for this URL (mock sources only)
    #[error("no page for: {url}")]
    NotFound { url: String },
}

/// Errors that can occur while extracting sessions from markup.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Page could not be fetched
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// A configured CSS selector does not parse
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A required element is absent from a block
    #[error("{page} block {index}: no element matches `{selector}`")]
    MissingElement {
        page: &'static str,
        index: usize,
        selector: String,
    },

    /// A required element is present but lacks the attribute we key on
    #[error("{page} block {index}: `{selector}` has no `{attribute}` attribute")]
    MissingAttribute {
        page: &'static str,
        index: usize,
        selector: String,
        attribute: &'static str,
    },
}

/// Errors that can occur while writing the CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Output file could not be created or flushed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for export operations.
pub type ExportResult<T> = std::result::Result<T, ExportError>;
