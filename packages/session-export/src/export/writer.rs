//! Fixed 19-column session CSV.
//!
//! Only id, name, description, track, times, location, speaker name and bio
//! are populated; every other column of the import schema is written empty.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::error::ExportResult;
use crate::types::Session;

pub const CSV_HEADER: [&str; 19] = [
    "Unique ID",
    "Name",
    "Description",
    "Activity Code",
    "Track",
    "Tags (comma-separated)",
    "Start Time",
    "End Time",
    "Location Name",
    "Parent Activity Unique ID",
    "Speaker 1 Display Name",
    "Speaker 1 First Name",
    "Speaker 1 Last Name",
    "Speaker 1 Role",
    "Speaker 1 Title",
    "Speaker 1 Bio",
    "Speaker 1 Email One",
    "Speaker 1 Email Two",
    "Speaker 1 Organization Name",
];

fn flatten_newlines(text: &str) -> String {
    text.replace('\n', " ")
}

/// The CSV row for one session, aligned with [`CSV_HEADER`].
pub fn session_record(session: &Session) -> [String; 19] {
    [
        session.unique_id.clone(),
        session.name.clone(),
        flatten_newlines(&session.description),
        String::new(), // Activity Code
        session.track.clone(),
        String::new(), // Tags
        session.start_datetime.clone(),
        session.end_datetime.clone(),
        session.location_name.clone(),
        String::new(), // Parent Activity Unique ID
        session.speaker.display_name.clone(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        flatten_newlines(&session.speaker.bio),
        String::new(),
        String::new(),
        String::new(),
    ]
}

/// Write the header and one row per session, in list order.
pub fn write_sessions<W: Write>(out: W, sessions: &[Session]) -> ExportResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for session in sessions {
        writer.write_record(session_record(session))?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write every session to it.
///
/// Returns the number of data rows written.
pub fn export_to_path(path: &Path, sessions: &[Session]) -> ExportResult<usize> {
    let file = File::create(path)?;
    write_sessions(BufWriter::new(file), sessions)?;

    info!(path = %path.display(), rows = sessions.len(), "Wrote session CSV");
    Ok(sessions.len())
}
