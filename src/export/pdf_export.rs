// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::pdf::PdfManager;
use crate::export::{ReportExport, notify_export_success};
use crate::ui::messages::info;
use chrono::Local;
use std::path::Path;

/// Export PDF usando PdfManager: titolo, ora di inizio, tabella e totale.
pub(crate) fn export_pdf(report: &ReportExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let data_vec = report.table();
    let stamp = format!("Generated {}", Local::now().format("%Y-%m-%d %H:%M"));

    let mut pdf = PdfManager::new();
    pdf.write_report(
        &report.title,
        &format!("Start Time: {}", report.start),
        &headers,
        &data_vec,
        &format!("Total Time: {}", report.total),
        &stamp,
    );

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
