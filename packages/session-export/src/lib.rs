//! Conference Session Export
//!
//! Scrapes a conference's talk listing, lab listing and schedule grid, joins
//! each session to its grid placement by title, and writes one CSV row per
//! session for a downstream event-app import.
//!
//! # Usage
//!
//! ```rust,ignore
//! use session_export::{ConferenceConfig, HttpPageSource, Schedule, export_to_path};
//!
//! let config = ConferenceConfig::default();
//! let source = HttpPageSource::new()?;
//! let mut schedule = Schedule::fetch(&source, config).await?;
//! schedule.parse()?;
//! export_to_path(&schedule.config().output_path, schedule.sessions())?;
//! ```
//!
//! # Modules
//!
//! - [`config`] - URLs, day-dates, selectors, output path
//! - [`fetch`] - Page sources (HTTP and mock)
//! - [`extract`] - Talk/lab extraction and schedule matching
//! - [`export`] - CSV writer
//! - [`pipeline`] - The [`Schedule`] orchestrator
//! - [`testing`] - HTML fixture builders

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod testing;
pub mod types;

pub use config::{ConferenceConfig, GridSelectors, LabSelectors, TalkSelectors};
pub use error::{ExportError, ExtractionError, FetchError};
pub use export::{export_to_path, write_sessions, CSV_HEADER};
pub use extract::{extract_labs, extract_talks, match_schedule};
pub use fetch::{HttpPageSource, MockPageSource, PageSource};
pub use pipeline::Schedule;
pub use types::{MatchReport, Session, SessionSource, Speaker};
