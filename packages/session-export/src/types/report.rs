//! Counters reported by the schedule matcher.

/// What the schedule matcher saw while walking the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub days: usize,
    pub timeslots: usize,
    pub activity_cells: usize,
    /// Cells whose title matched a session.
    pub matched: usize,
    /// Cells with a title but no session of that name (breaks, keynotes).
    pub unmatched: usize,
    /// Matched cells positioned past the last location column.
    pub cells_without_location: usize,
}

impl MatchReport {
    /// Fold another day's counters into this one.
    pub fn merge(&mut self, other: MatchReport) {
        self.days += other.days;
        self.timeslots += other.timeslots;
        self.activity_cells += other.activity_cells;
        self.matched += other.matched;
        self.unmatched += other.unmatched;
        self.cells_without_location += other.cells_without_location;
    }
}
