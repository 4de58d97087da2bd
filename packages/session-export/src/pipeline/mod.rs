//! Run orchestration: fetch the three pages, extract, match.
//!
//! ```rust,ignore
//! let source = HttpPageSource::new()?;
//! let mut schedule = Schedule::fetch(&source, ConferenceConfig::default()).await?;
//! schedule.parse()?;
//! export_to_path(&schedule.config().output_path, schedule.sessions())?;
//! ```

use scraper::Html;
use tracing::{info, warn};

use crate::config::ConferenceConfig;
use crate::error::Result;
use crate::extract::{duplicate_titles, extract_labs, extract_talks, match_schedule};
use crate::fetch::PageSource;
use crate::types::{MatchReport, Session};

/// The three parsed pages plus the sessions extracted from them.
pub struct Schedule {
    config: ConferenceConfig,
    program: Html,
    schedule: Html,
    labs: Html,
    sessions: Vec<Session>,
}

impl Schedule {
    /// Build from already-parsed documents.
    pub fn new(config: ConferenceConfig, program: Html, schedule: Html, labs: Html) -> Self {
        Self {
            config,
            program,
            schedule,
            labs,
            sessions: Vec::new(),
        }
    }

    /// Build from raw HTML bodies.
    pub fn from_html(config: ConferenceConfig, program: &str, schedule: &str, labs: &str) -> Self {
        Self::new(
            config,
            Html::parse_document(program),
            Html::parse_document(schedule),
            Html::parse_document(labs),
        )
    }

    /// Fetch program, schedule and labs pages, in that order.
    ///
    /// All bodies are fetched before any is parsed. The first failure aborts.
    pub async fn fetch<S>(source: &S, config: ConferenceConfig) -> Result<Self>
    where
        S: PageSource + ?Sized,
    {
        info!(url = %config.program_url, "Fetching program");
        let program = source.fetch_html(&config.program_url).await?;

        info!(url = %config.schedule_url, "Fetching schedule");
        let schedule = source.fetch_html(&config.schedule_url).await?;

        info!(url = %config.labs_url, "Fetching labs");
        let labs = source.fetch_html(&config.labs_url).await?;

        Ok(Self::from_html(config, &program, &schedule, &labs))
    }

    /// Extract talks then labs, and place them in the grid.
    ///
    /// Replaces any sessions from an earlier call, so parsing twice yields
    /// the same list.
    pub fn parse(&mut self) -> Result<MatchReport> {
        let mut sessions = extract_talks(&self.program, &self.config)?;
        sessions.extend(extract_labs(&self.labs, &self.config)?);

        for (title, count) in duplicate_titles(&sessions) {
            warn!(
                title = %title,
                count,
                "Duplicate session title; only the first can be scheduled"
            );
        }

        let report = match_schedule(&self.schedule, &mut sessions, &self.config)?;

        let unscheduled = sessions.iter().filter(|s| !s.is_scheduled()).count();
        info!(
            sessions = sessions.len(),
            unscheduled,
            "Parsed conference program"
        );

        self.sessions = sessions;
        Ok(report)
    }

    pub fn config(&self) -> &ConferenceConfig {
        &self.config
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn into_sessions(self) -> Vec<Session> {
        self.sessions
    }
}
