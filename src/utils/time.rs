//! Time utilities: parsing user-supplied clock times, reading the wall clock.

use crate::errors::AppResult;
use crate::models::{ClockTime, Meridiem};
use chrono::{Local, Timelike};

/// Current local wall time, truncated to the minute.
pub fn now_clock() -> AppResult<ClockTime> {
    let now = Local::now();
    ClockTime::from_24h(now.hour(), now.minute())
}

/// Parse a clock time, accepting the keyword `now` as well.
pub fn parse_clock(input: &str) -> AppResult<ClockTime> {
    if input.trim().eq_ignore_ascii_case("now") {
        return now_clock();
    }
    input.parse()
}

/// Parse `input` when given, otherwise fall back to `default`.
pub fn parse_clock_or(input: Option<&String>, default: &str) -> AppResult<ClockTime> {
    match input {
        Some(s) => parse_clock(s),
        None => parse_clock(default),
    }
}

/// Parse positional arguments in order. A lone `AM`/`PM` token is joined to
/// the time before it, so `5:52 PM 7:00 PM` works unquoted.
pub fn parse_clock_list(inputs: &[String]) -> AppResult<Vec<ClockTime>> {
    let mut joined: Vec<String> = Vec::with_capacity(inputs.len());

    for token in inputs {
        match joined.last_mut() {
            Some(prev) if Meridiem::from_code(token).is_some() && !prev.is_empty() => {
                prev.push(' ');
                prev.push_str(token);
            }
            _ => joined.push(token.clone()),
        }
    }

    joined.iter().map(|s| parse_clock(s)).collect()
}
