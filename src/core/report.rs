use crate::core::time_model::{Elapsed, elapsed, resolve};
use crate::models::{ClockTime, TimeEntry};

/// Column headers shared by the console table and every export format.
pub const COLUMN_HEADERS: [&str; 3] = ["Added Time", "Difference from Start", "Diff (hh:mm)"];

pub const EMPTY_LEDGER_PROMPT: &str = "Add times above to see and download your report.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferenceRow {
    pub entry: TimeEntry,
    pub elapsed: Elapsed,
}

impl DifferenceRow {
    /// Row cells in `COLUMN_HEADERS` order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.entry.display.clone(),
            self.elapsed.to_long(),
            self.elapsed.to_hhmm(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub start: ClockTime,
    pub rows: Vec<DifferenceRow>,
    pub total: Elapsed,
}

impl Report {
    pub fn start_display(&self) -> String {
        self.start.display()
    }

    pub fn total_display(&self) -> String {
        self.total.to_long()
    }

    pub fn table(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(DifferenceRow::cells).collect()
    }
}

/// One row per entry in insertion order; the total is the plain sum of the
/// per-entry differences (not the span between the earliest and latest time).
///
/// Callers are expected to special-case an empty `entries` slice.
pub fn compute_report(start: &ClockTime, entries: &[TimeEntry]) -> Report {
    let start_instant = resolve(start);

    let rows: Vec<DifferenceRow> = entries
        .iter()
        .map(|entry| DifferenceRow {
            entry: entry.clone(),
            elapsed: elapsed(start_instant, resolve(&entry.time)),
        })
        .collect();

    let total = rows.iter().map(|r| r.elapsed).sum();

    Report {
        start: *start,
        rows,
        total,
    }
}
