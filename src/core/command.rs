//! Parsing of the lines typed in an interactive session.

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::ClockTime;
use crate::utils::parse_clock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Replace the start time
    Start(ClockTime),
    /// Append a time to the ledger
    Add(ClockTime),
    RemoveLast,
    Clear,
    Report,
    Export {
        format: Option<ExportFormat>,
        file: Option<String>,
    },
    Help,
    Quit,
    /// Blank line
    Nothing,
}

impl SessionCommand {
    pub fn parse(line: &str) -> AppResult<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(SessionCommand::Nothing);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((k, r)) => (k, r.trim()),
            None => (line, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "start" | "s" => Ok(SessionCommand::Start(parse_clock(require_arg(keyword, rest)?)?)),
            "add" | "a" => Ok(SessionCommand::Add(parse_clock(require_arg(keyword, rest)?)?)),
            "undo" | "remove-last" | "pop" => Ok(SessionCommand::RemoveLast),
            "clear" => Ok(SessionCommand::Clear),
            "report" | "list" | "show" => Ok(SessionCommand::Report),
            "export" => parse_export(rest),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            // a bare time is a shortcut for `add`
            _ => parse_clock(line)
                .map(SessionCommand::Add)
                .map_err(|_| AppError::UnknownCommand(keyword.to_string())),
        }
    }
}

fn require_arg<'a>(keyword: &str, rest: &'a str) -> AppResult<&'a str> {
    if rest.is_empty() {
        Err(AppError::InvalidTime(format!("missing time after '{keyword}'")))
    } else {
        Ok(rest)
    }
}

/// `export [FORMAT] [FILE]`
fn parse_export(rest: &str) -> AppResult<SessionCommand> {
    if rest.is_empty() {
        return Ok(SessionCommand::Export {
            format: None,
            file: None,
        });
    }

    let (first, tail) = match rest.split_once(char::is_whitespace) {
        Some((f, t)) => (f, t.trim()),
        None => (rest, ""),
    };

    match ExportFormat::parse(first) {
        Ok(format) => Ok(SessionCommand::Export {
            format: Some(format),
            file: (!tail.is_empty()).then(|| tail.to_string()),
        }),
        Err(_) => Ok(SessionCommand::Export {
            format: None,
            file: Some(rest.to_string()),
        }),
    }
}
