// src/export/html.rs

use crate::errors::AppResult;
use crate::export::model::get_headers;
use crate::export::{ReportExport, notify_export_success};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

const STYLE: &str = "table {width:100%;border-collapse:collapse;}
th,td {border:1px solid #888;padding:8px;text-align:center;}
th {background-color:#f2f2f2;}";

/// Standalone HTML page with the report table, printable to PDF from any browser.
pub(crate) fn render_html(report: &ReportExport) -> String {
    let mut table = String::from("<table>\n<thead>\n<tr>");
    for h in get_headers() {
        table.push_str(&format!("<th>{}</th>", escape(h)));
    }
    table.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in report.table() {
        table.push_str("<tr>");
        for cell in row {
            table.push_str(&format!("<td>{}</td>", escape(&cell)));
        }
        table.push_str("</tr>\n");
    }
    table.push_str("</tbody>\n</table>");

    format!(
        "<html>\n<head><meta charset='utf-8'><title>{title}</title><style>\n{STYLE}\n</style></head>\n<body>\n<h2>{title}</h2>\n<p><b>Start Time:</b> {start}</p>\n{table}\n<h3>Total Time: {total}</h3>\n</body></html>\n",
        title = escape(&report.title),
        start = escape(&report.start),
        total = escape(&report.total),
    )
}

pub(crate) fn export_html(report: &ReportExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to HTML: {}", path.display()));

    fs::write(path, render_html(report))?;

    notify_export_success("HTML", path);
    Ok(())
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
