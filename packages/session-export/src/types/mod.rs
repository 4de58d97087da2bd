//! Data types produced by extraction and consumed by export.

pub mod report;
pub mod session;

pub use report::MatchReport;
pub use session::{Session, SessionSource, Speaker};
