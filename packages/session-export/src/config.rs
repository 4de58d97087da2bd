//! Configuration for a conference export run.
//!
//! Every literal the scrape depends on (URLs, day-dates, selectors, output
//! path) lives here so fixtures and other conference years can substitute
//! values without touching extraction code. `ConferenceConfig::default()` is
//! the RailsConf 2015 program.

use std::path::PathBuf;

/// Prefix stripped from presenter headings on both listing pages.
pub const PRESENTER_PREFIX: &str = "presented by: ";

/// Placeholder header of the time column in the schedule grid.
pub const TIME_SLOTS_HEADER: &str = "(Time Slots)";

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "rails_conf_sessions.csv";

/// Top-level configuration for a single run.
#[derive(Debug, Clone)]
pub struct ConferenceConfig {
    /// Talk listing page.
    pub program_url: String,

    /// Multi-day schedule grid.
    pub schedule_url: String,

    /// Lab listing page.
    pub labs_url: String,

    /// Calendar date of each grid day, in grid order (`div#day-1` first).
    pub days: Vec<String>,

    /// Where the CSV is written.
    pub output_path: PathBuf,

    pub talks: TalkSelectors,
    pub labs: LabSelectors,
    pub grid: GridSelectors,

    /// Literal removed from presenter headings before trimming.
    pub presenter_prefix: String,

    /// Header text of the grid's time column, dropped from location columns.
    pub time_slots_header: String,
}

impl Default for ConferenceConfig {
    fn default() -> Self {
        Self {
            program_url: "http://railsconf.com/program".to_string(),
            schedule_url: "http://railsconf.com/schedule".to_string(),
            labs_url: "http://railsconf.com/program/labs".to_string(),
            days: vec![
                "2015-04-21".to_string(),
                "2015-04-22".to_string(),
                "2015-04-23".to_string(),
            ],
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            talks: TalkSelectors::default(),
            labs: LabSelectors::default(),
            grid: GridSelectors::default(),
            presenter_prefix: PRESENTER_PREFIX.to_string(),
            time_slots_header: TIME_SLOTS_HEADER.to_string(),
        }
    }
}

impl ConferenceConfig {
    /// Create a config with the RailsConf 2015 defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point all three pages at a different host (e.g. a mock server).
    ///
    /// Keeps the default paths: `/program`, `/schedule`, `/program/labs`.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        self.program_url = format!("{}/program", base);
        self.schedule_url = format!("{}/schedule", base);
        self.labs_url = format!("{}/program/labs", base);
        self
    }

    /// Set the talk listing URL.
    pub fn with_program_url(mut self, url: impl Into<String>) -> Self {
        self.program_url = url.into();
        self
    }

    /// Set the schedule grid URL.
    pub fn with_schedule_url(mut self, url: impl Into<String>) -> Self {
        self.schedule_url = url.into();
        self
    }

    /// Set the lab listing URL.
    pub fn with_labs_url(mut self, url: impl Into<String>) -> Self {
        self.labs_url = url.into();
        self
    }

    /// Replace the grid day-dates.
    pub fn with_days(mut self, days: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.days = days.into_iter().map(|d| d.into()).collect();
        self
    }

    /// Set the CSV output path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

/// Selectors for the talk listing page.
#[derive(Debug, Clone)]
pub struct TalkSelectors {
    pub block: String,
    pub bio_paragraphs: String,
    pub paragraphs: String,
    /// First match carries the session id in its `name` attribute.
    pub id_anchor: String,
    pub title: String,
    pub presenter: String,
}

impl Default for TalkSelectors {
    fn default() -> Self {
        Self {
            block: "div.session".to_string(),
            bio_paragraphs: "section.bio p".to_string(),
            paragraphs: "p".to_string(),
            id_anchor: "a".to_string(),
            title: "h2.session-talk-title a".to_string(),
            presenter: "h3.session-presenter".to_string(),
        }
    }
}

/// Selectors for the lab listing page.
#[derive(Debug, Clone)]
pub struct LabSelectors {
    pub block: String,
    pub bio_paragraphs: String,
    pub description_paragraphs: String,
    /// First match carries the session id in its `id` attribute.
    pub id_heading: String,
    pub title: String,
    pub presenter: String,
}

impl Default for LabSelectors {
    fn default() -> Self {
        Self {
            block: "div.program-description-wrap".to_string(),
            bio_paragraphs: "h3.program-speaker-subhead + p".to_string(),
            description_paragraphs: "h3.session-presenter + p".to_string(),
            id_heading: "h2.session-talk-title".to_string(),
            title: "h2.session-talk-title a".to_string(),
            presenter: "h3.session-presenter".to_string(),
        }
    }
}

/// Selectors for the schedule grid.
#[derive(Debug, Clone)]
pub struct GridSelectors {
    /// Day containers are `{day_prefix}{n}` with `n` starting at 1.
    pub day_prefix: String,
    pub time_slot: String,
    pub location_header: String,
    pub session_title: String,
    pub track_name: String,
}

impl Default for GridSelectors {
    fn default() -> Self {
        Self {
            day_prefix: "div#day-".to_string(),
            time_slot: "td.schedule-time-slot".to_string(),
            location_header: "th".to_string(),
            session_title: "p.session-title".to_string(),
            track_name: "p.track_name_base".to_string(),
        }
    }
}

impl GridSelectors {
    /// Selector for the container of the zero-based grid day `day_index`.
    pub fn day_container(&self, day_index: usize) -> String {
        format!("{}{}", self.day_prefix, day_index + 1)
    }
}
