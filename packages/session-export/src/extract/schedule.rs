//! Schedule grid matching.
//!
//! Sessions are joined to grid cells by exact title text. Titles are not
//! unique in general: the first session with a given title is the only one
//! ever placed, and a title appearing in several cells keeps the last
//! placement. Cells with an empty title are skipped, so a session whose
//! title is empty is never placed.
//!
//! Location columns are read once from the first day's header row and reused
//! for every day, so all days are assumed to share the same rooms.

use scraper::{ElementRef, Html};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::config::ConferenceConfig;
use crate::error::Result;
use crate::types::{MatchReport, Session};

use super::html::{element_text, Matcher};

/// Maps a session title to the position of the first session with that title.
#[derive(Debug, Default)]
pub struct TitleIndex {
    positions: HashMap<String, usize>,
}

impl TitleIndex {
    pub fn build(sessions: &[Session]) -> Self {
        let mut positions = HashMap::with_capacity(sessions.len());
        for (position, session) in sessions.iter().enumerate() {
            positions.entry(session.name.clone()).or_insert(position);
        }
        Self { positions }
    }

    pub fn get(&self, title: &str) -> Option<usize> {
        self.positions.get(title).copied()
    }
}

/// Split a timeslot label on `" - "` into `(start, end)`.
///
/// The first token is the start and the last the end; a label without the
/// separator yields the same text for both.
pub fn split_time_range(label: &str) -> (&str, &str) {
    let mut parts = label.split(" - ");
    let start = parts.next().unwrap_or_default();
    let end = parts.last().unwrap_or(start);
    (start, end)
}

/// Location column headers from the first grid day, minus the time column.
pub fn read_locations(document: &Html, config: &ConferenceConfig) -> Result<Vec<String>> {
    let header = Matcher::parse(&format!(
        "{} {}",
        config.grid.day_container(0),
        config.grid.location_header
    ))?;

    Ok(document
        .select(header.selector())
        .map(|th| element_text(th).trim().to_string())
        .filter(|text| text != &config.time_slots_header)
        .collect())
}

/// Place sessions in the grid for every configured day.
///
/// Sessions with no matching cell are left untouched.
pub fn match_schedule(
    document: &Html,
    sessions: &mut [Session],
    config: &ConferenceConfig,
) -> Result<MatchReport> {
    let locations = read_locations(document, config)?;
    let index = TitleIndex::build(sessions);
    let time_slot = Matcher::parse(&config.grid.time_slot)?;
    let session_title = Matcher::parse(&config.grid.session_title)?;
    let track_name = Matcher::parse(&config.grid.track_name)?;

    info!(
        days = config.days.len(),
        locations = locations.len(),
        "Matching sessions against schedule grid"
    );

    let mut report = MatchReport::default();

    for (day_index, day) in config.days.iter().enumerate() {
        let container = Matcher::parse(&config.grid.day_container(day_index))?;
        let mut day_report = MatchReport {
            days: 1,
            ..Default::default()
        };

        let containers: Vec<ElementRef<'_>> = document.select(container.selector()).collect();
        if containers.is_empty() {
            warn!(day = %day, selector = %container.as_str(), "Schedule day not found in grid");
        }

        for slot in containers.iter().flat_map(|c| time_slot.all(*c)) {
            day_report.timeslots += 1;
            let label = element_text(slot);
            let (start, end) = split_time_range(label.trim());

            let activities = slot
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .filter(|cell| cell.value().name() == "td");

            for (column, cell) in activities.enumerate() {
                day_report.activity_cells += 1;

                let title = session_title.text(cell);
                let title = title.trim();
                if title.is_empty() {
                    continue;
                }

                let Some(position) = index.get(title) else {
                    day_report.unmatched += 1;
                    debug!(day = %day, start, title, "No session for grid cell");
                    continue;
                };

                let location = locations.get(column).map(String::as_str);
                if location.is_none() {
                    day_report.cells_without_location += 1;
                    warn!(
                        day = %day,
                        start,
                        title,
                        column,
                        locations = locations.len(),
                        "Grid cell is past the last location column"
                    );
                }

                let track = track_name.text(cell).trim().to_string();
                sessions[position].place(day, start, end, location, track);
                day_report.matched += 1;
            }
        }

        debug!(
            day = %day,
            timeslots = day_report.timeslots,
            matched = day_report.matched,
            "Matched schedule day"
        );
        report.merge(day_report);
    }

    info!(
        timeslots = report.timeslots,
        cells = report.activity_cells,
        matched = report.matched,
        unmatched = report.unmatched,
        without_location = report.cells_without_location,
        "Schedule matching complete"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{schedule_page, CellFixture, DayFixture};
    use crate::types::Speaker;

    fn session(name: &str) -> Session {
        Session::new(format!("id-{name}"), name, "", Speaker::default())
    }

    #[test]
    fn test_split_time_range() {
        assert_eq!(split_time_range("10:00am - 11:00am"), ("10:00am", "11:00am"));
        assert_eq!(split_time_range("Noon"), ("Noon", "Noon"));
        assert_eq!(split_time_range("1 - 2 - 3"), ("1", "3"));
    }

    #[test]
    fn test_title_index_first_wins() {
        let sessions = vec![session("A"), session("B"), session("A")];
        let index = TitleIndex::build(&sessions);
        assert_eq!(index.get("A"), Some(0));
        assert_eq!(index.get("B"), Some(1));
        assert_eq!(index.get("C"), None);
    }

    #[test]
    fn test_read_locations_drops_time_column() {
        let html = schedule_page(&[DayFixture::new(["Room A", "Room B"])]);
        let locations =
            read_locations(&Html::parse_document(&html), &ConferenceConfig::default()).unwrap();
        assert_eq!(locations, vec!["Room A", "Room B"]);
    }

    #[test]
    fn test_places_matching_session() {
        let html = schedule_page(&[DayFixture::new(["Room A"]).slot(
            "10:00am - 11:00am",
            vec![CellFixture::new("Rails in Depth").track("Advanced")],
        )]);
        let mut sessions = vec![session("Rails in Depth")];

        let report = match_schedule(
            &Html::parse_document(&html),
            &mut sessions,
            &ConferenceConfig::default(),
        )
        .unwrap();

        assert_eq!(sessions[0].start_datetime, "2015-04-21 10:00am");
        assert_eq!(sessions[0].end_datetime, "2015-04-21 11:00am");
        assert_eq!(sessions[0].location_name, "Room A");
        assert_eq!(sessions[0].track, "Advanced");
        assert_eq!(report.matched, 1);
        assert_eq!(report.days, 3);
    }

    #[test]
    fn test_later_days_use_day_one_locations() {
        let html = schedule_page(&[
            DayFixture::new(["Room A", "Room B"]),
            DayFixture::new(["Hall 1", "Hall 2"]).slot(
                "2:00pm - 2:40pm",
                vec![CellFixture::empty(), CellFixture::new("Day Two Talk")],
            ),
        ]);
        let mut sessions = vec![session("Day Two Talk")];

        match_schedule(
            &Html::parse_document(&html),
            &mut sessions,
            &ConferenceConfig::default(),
        )
        .unwrap();

        assert_eq!(sessions[0].start_datetime, "2015-04-22 2:00pm");
        assert_eq!(sessions[0].location_name, "Room B");
    }

    #[test]
    fn test_unmatched_session_keeps_blank_placement() {
        let html = schedule_page(&[DayFixture::new(["Room A"])
            .slot("9:00am - 10:00am", vec![CellFixture::new("Keynote")])]);
        let mut sessions = vec![session("Unscheduled")];

        let report = match_schedule(
            &Html::parse_document(&html),
            &mut sessions,
            &ConferenceConfig::default(),
        )
        .unwrap();

        assert!(!sessions[0].is_scheduled());
        assert_eq!(sessions[0], session("Unscheduled"));
        assert_eq!(report.unmatched, 1);
    }

    #[test]
    fn test_cell_past_last_location_does_not_crash() {
        let html = schedule_page(&[DayFixture::new(["Room A"]).slot(
            "10:00am - 11:00am",
            vec![CellFixture::new("First"), CellFixture::new("Overflow").track("Labs")],
        )]);
        let mut sessions = vec![session("First"), session("Overflow")];

        let report = match_schedule(
            &Html::parse_document(&html),
            &mut sessions,
            &ConferenceConfig::default(),
        )
        .unwrap();

        assert_eq!(sessions[1].start_datetime, "2015-04-21 10:00am");
        assert_eq!(sessions[1].location_name, "");
        assert_eq!(sessions[1].track, "Labs");
        assert_eq!(report.cells_without_location, 1);
        assert_eq!(report.matched, 2);
    }

    #[test]
    fn test_empty_title_cell_never_places_untitled_session() {
        let html = schedule_page(&[DayFixture::new(["Room A"])
            .slot("10:00am - 11:00am", vec![CellFixture::empty()])]);
        let mut sessions = vec![session("")];

        let report = match_schedule(
            &Html::parse_document(&html),
            &mut sessions,
            &ConferenceConfig::default(),
        )
        .unwrap();

        assert_eq!(sessions[0].start_datetime, "");
        assert_eq!(report.matched, 0);
        assert_eq!(report.activity_cells, 1);
    }

    #[test]
    fn test_duplicate_titles_place_first_session_last_write_wins() {
        let html = schedule_page(&[
            DayFixture::new(["Room A", "Room B"])
                .slot("10:00am - 11:00am", vec![CellFixture::new("Lightning Talks")]),
            DayFixture::new(["Room A", "Room B"]).slot(
                "4:00pm - 5:00pm",
                vec![CellFixture::empty(), CellFixture::new("Lightning Talks")],
            ),
        ]);
        let mut sessions = vec![session("Lightning Talks"), session("Lightning Talks")];

        match_schedule(
            &Html::parse_document(&html),
            &mut sessions,
            &ConferenceConfig::default(),
        )
        .unwrap();

        assert_eq!(sessions[0].start_datetime, "2015-04-22 4:00pm");
        assert_eq!(sessions[0].location_name, "Room B");
        assert!(!sessions[1].is_scheduled());
    }
}
