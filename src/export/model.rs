// src/export/model.rs

use crate::core::report::{COLUMN_HEADERS, DifferenceRow, Report};
use serde::Serialize;

/// Flat row used by CSV / JSON / XLSX; field names match the table headers.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RowExport {
    #[serde(rename = "Added Time")]
    pub added_time: String,
    #[serde(rename = "Difference from Start")]
    pub difference: String,
    #[serde(rename = "Diff (hh:mm)")]
    pub diff_hhmm: String,
}

impl From<&DifferenceRow> for RowExport {
    fn from(row: &DifferenceRow) -> Self {
        Self {
            added_time: row.entry.display.clone(),
            difference: row.elapsed.to_long(),
            diff_hhmm: row.elapsed.to_hhmm(),
        }
    }
}

impl RowExport {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.added_time.clone(),
            self.difference.clone(),
            self.diff_hhmm.clone(),
        ]
    }
}

/// Whole report as handed to the document writers: plain strings and numbers.
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub title: String,
    pub start: String,
    pub rows: Vec<RowExport>,
    pub total: String,
    pub total_hhmm: String,
    pub total_seconds: u64,
}

impl ReportExport {
    pub fn new(report: &Report, title: &str) -> Self {
        Self {
            title: title.to_string(),
            start: report.start_display(),
            rows: report.rows.iter().map(RowExport::from).collect(),
            total: report.total.to_long(),
            total_hhmm: report.total.to_hhmm(),
            total_seconds: report.total.as_seconds(),
        }
    }

    /// Trailing summary row for tabular formats.
    pub fn total_row(&self) -> RowExport {
        RowExport {
            added_time: "Total".to_string(),
            difference: self.total.clone(),
            diff_hhmm: self.total_hhmm.clone(),
        }
    }

    pub fn table(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(RowExport::cells).collect()
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    COLUMN_HEADERS.to_vec()
}
