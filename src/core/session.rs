//! Interactive session: reads commands line by line and applies them to the
//! ledger owned by the caller.

use crate::config::Config;
use crate::core::command::SessionCommand;
use crate::core::ledger::SessionLedger;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::{error, header, info, success};
use crate::ui::report_view::{print_empty_prompt, print_report};
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands: start <TIME> sets the start time; add <TIME> (or just <TIME>) adds a time; \
undo removes the last added time; clear removes all times; report shows the table and the total; \
export [pdf|html|csv|json|xlsx] [FILE] writes the report; quit ends the session. \
TIME is H:MM AM|PM, a 24-hour HH:MM, or 'now'.";

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub struct SessionLogic;

impl SessionLogic {
    /// Run until `quit` or end of input. Errors in single commands are
    /// reported and the session goes on; only I/O failures end it early.
    pub fn run(ledger: &mut SessionLedger, input: &mut dyn BufRead, cfg: &Config) -> AppResult<()> {
        header("Time Difference Sum Calculator");
        info(format!(
            "Start time: {}. Type 'help' for the list of commands.",
            ledger.start().display()
        ));

        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let flow = match SessionCommand::parse(&line) {
                Ok(cmd) => match Self::apply(ledger, cmd, input, cfg) {
                    Ok(flow) => flow,
                    Err(e) => {
                        error(e);
                        Flow::Continue
                    }
                },
                Err(e) => {
                    error(e);
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                break;
            }
        }

        println!();
        info(format!("Session closed ({} times added).", ledger.len()));
        Ok(())
    }

    /// Apply one command to the ledger.
    pub fn apply(
        ledger: &mut SessionLedger,
        cmd: SessionCommand,
        input: &mut dyn BufRead,
        cfg: &Config,
    ) -> AppResult<Flow> {
        match cmd {
            SessionCommand::Start(t) => {
                ledger.set_start(t);
                success(format!("Start time set to {}", t.display()));
            }
            SessionCommand::Add(t) => {
                let entry = ledger.append(t);
                success(format!("Added {}", entry.display));
                Self::print_count(ledger);
            }
            SessionCommand::RemoveLast => {
                match ledger.remove_last() {
                    Some(entry) => success(format!("Removed {}", entry.display)),
                    None => info("Nothing to remove."),
                }
                Self::print_count(ledger);
            }
            SessionCommand::Clear => {
                ledger.clear();
                success("All times cleared.");
                Self::print_count(ledger);
            }
            SessionCommand::Report => match ledger.report() {
                Some(report) => print_report(&report, cfg.separator()),
                None => print_empty_prompt(),
            },
            SessionCommand::Export { format, file } => match ledger.report() {
                Some(report) => {
                    let (format, path) =
                        ExportLogic::resolve_target(cfg, format, file.as_deref())?;
                    ExportLogic::export(&report, format, &path, &cfg.report_title, false, input)?;
                }
                None => print_empty_prompt(),
            },
            SessionCommand::Help => println!("{}", textwrap::fill(HELP, 78)),
            SessionCommand::Quit => return Ok(Flow::Stop),
            SessionCommand::Nothing => {}
        }

        Ok(Flow::Continue)
    }

    fn print_count(ledger: &SessionLedger) {
        info(format!("{} times added", ledger.len()));
    }
}
