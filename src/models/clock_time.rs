//! 12-hour wall-clock time without any date component.

use crate::errors::{AppError, AppResult};
use crate::models::meridiem::Meridiem;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Accepted forms: `5:52 PM`, `05:52pm`, `5:52 p.m.`, `17:52`.
/// Any trailing word is captured so a bad meridiem is reported as such.
static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d{1,2}):(\d{2})\s*([a-z][a-z.\s]*?)?\s*$")
        .expect("valid clock pattern")
});

/// Immutable `(hour, minute, meridiem)` triple with hour in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    meridiem: Meridiem,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32, meridiem: Meridiem) -> AppResult<Self> {
        if !(1..=12).contains(&hour) {
            return Err(AppError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(AppError::InvalidMinute(minute));
        }

        Ok(Self {
            hour,
            minute,
            meridiem,
        })
    }

    /// Build from a 24-hour `(hour, minute)` pair: 0 → 12 AM, 13 → 1 PM.
    pub fn from_24h(hour: u32, minute: u32) -> AppResult<Self> {
        if hour > 23 {
            return Err(AppError::InvalidHour(hour));
        }

        let meridiem = if hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
        let h12 = match hour % 12 {
            0 => 12,
            h => h,
        };

        Self::new(h12, minute, meridiem)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Hour on the 24-hour clock (12 AM → 0, 12 PM → 12).
    pub fn hour_24(&self) -> u32 {
        let h = self.hour % 12;
        if self.meridiem.is_pm() { h + 12 } else { h }
    }

    /// Display form used in tables and exports, e.g. `05:52 PM`.
    pub fn display(&self) -> String {
        format!("{:02}:{:02} {}", self.hour, self.minute, self.meridiem)
    }

    /// Parse user input. Without a meridiem the value is read as 24-hour time.
    pub fn parse(input: &str) -> AppResult<Self> {
        let caps = CLOCK_RE
            .captures(input)
            .ok_or_else(|| AppError::InvalidTime(input.trim().to_string()))?;

        let hour: u32 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidTime(input.trim().to_string()))?;
        let minute: u32 = caps[2]
            .parse()
            .map_err(|_| AppError::InvalidTime(input.trim().to_string()))?;

        match caps.get(3) {
            Some(m) => {
                let meridiem = Meridiem::from_code(m.as_str())
                    .ok_or_else(|| AppError::InvalidMeridiem(m.as_str().trim().to_string()))?;
                Self::new(hour, minute, meridiem)
            }
            None => Self::from_24h(hour, minute),
        }
    }
}

impl FromStr for ClockTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
