use crate::core::report::{COLUMN_HEADERS, EMPTY_LEDGER_PROMPT, Report};
use crate::ui::messages::{header, info, total};
use crate::utils::table::Table;

/// Print the differences table followed by the highlighted total.
pub fn print_report(report: &Report, separator: char) {
    header("Times & Differences");
    println!("Start Time: {}\n", report.start_display());

    let mut table = Table::new(&COLUMN_HEADERS, separator);
    for row in report.table() {
        table.add_row(row);
    }
    print!("{}", table.render());

    println!();
    total(
        "Total (sum of all differences from start):",
        report.total_display(),
    );
}

/// Prompt shown instead of a report while the ledger is empty.
pub fn print_empty_prompt() {
    info(EMPTY_LEDGER_PROMPT);
}
