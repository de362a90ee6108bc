use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::SessionLedger;
use crate::core::session::SessionLogic;
use crate::errors::AppResult;
use crate::utils::time::parse_clock_or;
use std::io;

/// Run an interactive session. The ledger lives here, for the duration of
/// the session only.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { start } = cmd {
        let start = parse_clock_or(start.as_ref(), &cfg.default_start)?;
        let mut ledger = SessionLedger::new(start);

        let stdin = io::stdin();
        let mut input = stdin.lock();
        SessionLogic::run(&mut ledger, &mut input, cfg)?;
    }
    Ok(())
}
