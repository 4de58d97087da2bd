//! Session and speaker records.

/// Which listing page a session was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionSource {
    #[default]
    Talk,
    Lab,
}

/// The presenter of a session.
///
/// Owned by exactly one [`Session`]; speakers presenting twice appear twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Speaker {
    pub display_name: String,
    /// Bio paragraphs, trimmed and joined with a single space.
    pub bio: String,
}

impl Speaker {
    pub fn new(display_name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            bio: bio.into(),
        }
    }
}

/// One talk or lab, with optional schedule placement.
///
/// Placement fields stay empty until the schedule matcher finds the
/// session's title in the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub unique_id: String,
    pub name: String,
    pub description: String,
    pub speaker: Speaker,
    /// `"{day} {start}"`, e.g. `2015-04-21 10:00am`
    pub start_datetime: String,
    /// `"{day} {end}"`
    pub end_datetime: String,
    pub location_name: String,
    pub track: String,
    pub source: SessionSource,
}

impl Session {
    /// Create an unscheduled session.
    pub fn new(
        unique_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        speaker: Speaker,
    ) -> Self {
        Self {
            unique_id: unique_id.into(),
            name: name.into(),
            description: description.into(),
            speaker,
            ..Default::default()
        }
    }

    /// Mark which listing page produced this session.
    pub fn with_source(mut self, source: SessionSource) -> Self {
        self.source = source;
        self
    }

    /// Whether the matcher has placed this session in the grid.
    pub fn is_scheduled(&self) -> bool {
        !self.start_datetime.is_empty()
    }

    /// Record a grid placement. Overwrites any earlier placement.
    pub fn place(
        &mut self,
        day: &str,
        start: &str,
        end: &str,
        location: Option<&str>,
        track: impl Into<String>,
    ) {
        self.start_datetime = format!("{} {}", day, start);
        self.end_datetime = format!("{} {}", day, end);
        self.location_name = location.unwrap_or_default().to_string();
        self.track = track.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unscheduled() {
        let session = Session::new("s1", "Talk", "", Speaker::default());
        assert!(!session.is_scheduled());
        assert_eq!(session.location_name, "");
        assert_eq!(session.track, "");
        assert_eq!(session.source, SessionSource::Talk);
    }

    #[test]
    fn test_place_joins_day_and_time() {
        let mut session = Session::new("s1", "Talk", "", Speaker::default());
        session.place("2015-04-21", "10:00am", "11:00am", Some("Room A"), "Beginner");

        assert!(session.is_scheduled());
        assert_eq!(session.start_datetime, "2015-04-21 10:00am");
        assert_eq!(session.end_datetime, "2015-04-21 11:00am");
        assert_eq!(session.location_name, "Room A");
        assert_eq!(session.track, "Beginner");
    }

    #[test]
    fn test_place_without_location_clears_it() {
        let mut session = Session::new("s1", "Talk", "", Speaker::default());
        session.place("2015-04-21", "9:00am", "9:40am", Some("Room A"), "");
        session.place("2015-04-22", "1:00pm", "1:40pm", None, "");

        assert_eq!(session.start_datetime, "2015-04-22 1:00pm");
        assert_eq!(session.location_name, "");
    }
}
