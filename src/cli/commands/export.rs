use crate::cli::commands::report::ledger_from_args;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::report_view::print_empty_prompt;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        start,
        format,
        file,
        force,
        times,
    } = cmd
    {
        let ledger = ledger_from_args(start.as_ref(), times, cfg)?;

        let Some(report) = ledger.report() else {
            print_empty_prompt();
            return Ok(());
        };

        let (format, path) = ExportLogic::resolve_target(cfg, *format, file.as_deref())?;

        let stdin = io::stdin();
        let mut input = stdin.lock();
        ExportLogic::export(&report, format, &path, &cfg.report_title, *force, &mut input)?;
    }
    Ok(())
}
