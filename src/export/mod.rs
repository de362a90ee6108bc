// src/export/mod.rs

mod fs_utils;
mod html;
mod json_csv;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{ReportExport, RowExport};

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Html,
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// File extension, identical to the format name.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Parse a format name coming from the config file or a session command.
    pub fn parse(name: &str) -> AppResult<Self> {
        ExportFormat::from_str(name.trim(), true)
            .map_err(|_| AppError::InvalidExportFormat(name.trim().to_string()))
    }
}
