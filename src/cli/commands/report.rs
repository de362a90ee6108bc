use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::SessionLedger;
use crate::errors::AppResult;
use crate::ui::report_view::{print_empty_prompt, print_report};
use crate::utils::time::{parse_clock_list, parse_clock_or};

/// Build a ledger from the command-line times and print the report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { start, times } = cmd {
        let ledger = ledger_from_args(start.as_ref(), times, cfg)?;

        match ledger.report() {
            Some(report) => print_report(&report, cfg.separator()),
            None => print_empty_prompt(),
        }
    }
    Ok(())
}

/// Parse the start time (or the configured default) and the added times.
pub(crate) fn ledger_from_args(
    start: Option<&String>,
    times: &[String],
    cfg: &Config,
) -> AppResult<SessionLedger> {
    let start = parse_clock_or(start, &cfg.default_start)?;

    let mut ledger = SessionLedger::new(start);
    for t in parse_clock_list(times)? {
        ledger.append(t);
    }
    Ok(ledger)
}
