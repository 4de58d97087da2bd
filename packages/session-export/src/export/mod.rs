//! CSV export for the downstream session import.

pub mod writer;

pub use writer::{export_to_path, session_record, write_sessions, CSV_HEADER};
