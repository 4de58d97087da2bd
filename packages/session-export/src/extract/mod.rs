//! Session extraction and schedule matching.
//!
//! - [`talks`] - program listing page
//! - [`labs`] - labs listing page
//! - [`schedule`] - grid placement by title

pub mod html;
pub mod labs;
pub mod schedule;
pub mod talks;

use std::collections::BTreeMap;

use crate::types::Session;

pub use labs::extract_labs;
pub use schedule::{match_schedule, read_locations, split_time_range, TitleIndex};
pub use talks::extract_talks;

/// Titles shared by more than one session, with their counts, sorted by title.
///
/// Only the first session with each of these titles can be placed in the grid.
pub fn duplicate_titles(sessions: &[Session]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for session in sessions {
        *counts.entry(session.name.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(title, count)| (title.to_string(), count))
        .collect()
}
