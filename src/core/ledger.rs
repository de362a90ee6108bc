use crate::core::report::{Report, compute_report};
use crate::models::{ClockTime, TimeEntry};

/// Ordered, session-scoped list of added times plus the current start time.
///
/// One ledger per session; it is owned by the session handler and passed
/// around by reference. Nothing here is ever written to disk.
#[derive(Debug, Clone)]
pub struct SessionLedger {
    start: ClockTime,
    entries: Vec<TimeEntry>,
}

impl SessionLedger {
    pub fn new(start: ClockTime) -> Self {
        Self {
            start,
            entries: Vec::new(),
        }
    }

    pub fn start(&self) -> &ClockTime {
        &self.start
    }

    pub fn set_start(&mut self, start: ClockTime) {
        self.start = start;
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn append(&mut self, time: ClockTime) -> &TimeEntry {
        self.entries.push(TimeEntry::new(time));
        &self.entries[self.entries.len() - 1]
    }

    /// No-op on an empty ledger.
    pub fn remove_last(&mut self) -> Option<TimeEntry> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// `None` while nothing has been added: callers show a prompt instead.
    pub fn report(&self) -> Option<Report> {
        if self.entries.is_empty() {
            return None;
        }
        Some(compute_report(&self.start, &self.entries))
    }
}
