// src/export/logic.rs

use crate::config::Config;
use crate::core::report::Report;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::html::export_html;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ReportExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::utils::path::{resolve_under, with_default_extension};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Format and destination file for an export.
    ///
    /// - no `file` → `<export_dir>/<file_stem>.<ext>`
    /// - relative `file` → placed under `export_dir`
    /// - absolute `file` → used as is
    ///
    /// A file extension naming a known format selects that format when none
    /// is given; an extension that contradicts `format` (or names no known
    /// format) is rejected. A missing extension is filled in from the format,
    /// which falls back to `default_format`.
    pub fn resolve_target(
        cfg: &Config,
        format: Option<ExportFormat>,
        file: Option<&str>,
    ) -> AppResult<(ExportFormat, PathBuf)> {
        let raw = match file {
            Some(f) => resolve_under(&cfg.export_dir, f),
            None => resolve_under(&cfg.export_dir, &cfg.file_stem),
        };

        let ext = raw
            .extension()
            .map(|e| e.to_string_lossy().to_string());

        let Some(ext) = ext else {
            let format = match format {
                Some(f) => f,
                None => ExportFormat::parse(&cfg.default_format)?,
            };
            return Ok((format, with_default_extension(&raw, format.extension())));
        };

        let from_ext = ExportFormat::parse(&ext).map_err(|_| {
            AppError::InvalidExportFormat(format!(
                "unknown file extension '.{ext}' for {}",
                raw.display()
            ))
        })?;

        match format {
            Some(f) if f != from_ext => Err(AppError::InvalidExportFormat(format!(
                "{} does not match the file extension '.{ext}'",
                f.as_str()
            ))),
            _ => Ok((from_ext, raw)),
        }
    }

    /// Write `report` to `path` in the given format.
    ///
    /// An existing file is only replaced with `force` or after the user
    /// answers `y` on `input`.
    pub fn export(
        report: &Report,
        format: ExportFormat,
        path: &Path,
        title: &str,
        force: bool,
        input: &mut dyn BufRead,
    ) -> AppResult<()> {
        ensure_writable(path, force, input)?;

        let data = ReportExport::new(report, title);

        match format {
            ExportFormat::Pdf => export_pdf(&data, path)?,
            ExportFormat::Html => export_html(&data, path)?,
            ExportFormat::Csv => export_csv(&data, path)?,
            ExportFormat::Json => export_json(&data, path)?,
            ExportFormat::Xlsx => export_xlsx(&data, path)?,
        }

        Ok(())
    }
}
