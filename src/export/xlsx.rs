// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::{ReportExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX con styling e auto-larghezza colonne.
pub(crate) fn export_xlsx(report: &ReportExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Titolo + ora di inizio
    // ---------------------------
    let title_format = Format::new().set_bold().set_font_size(14);
    worksheet
        .write_with_format(0, 0, report.title.as_str(), &title_format)
        .map_err(to_app_error)?;
    worksheet
        .write(1, 0, format!("Start Time: {}", report.start))
        .map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();
    let header_row: u32 = 3;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(header_row, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet
        .set_freeze_panes(header_row + 1, 0)
        .map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    let mut row = header_row + 1;
    for (row_index, values) in report.table().iter().enumerate() {
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };
        let fmt = cell_format(band_color, false);

        for (col, value) in values.iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, &fmt)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
        row += 1;
    }

    // ---------------------------
    // Totale
    // ---------------------------
    let total_fmt = cell_format(Color::RGB(0xDDEBF7), true);
    for (col, value) in report.total_row().cells().iter().enumerate() {
        write_cell(worksheet, row, col as u16, value, &total_fmt)?;
        col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn cell_format(bg: Color, bold: bool) -> Format {
    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if bold { fmt.set_bold() } else { fmt }
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, fmt: &Format) -> AppResult<()> {
    worksheet
        .write_with_format(row, col, s, fmt)
        .map_err(to_app_error)?;
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
