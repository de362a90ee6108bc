use crate::models::clock_time::ClockTime;
use serde::Serialize;

/// An added time, with its display text captured when it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeEntry {
    pub time: ClockTime,
    pub display: String,
}

impl TimeEntry {
    pub fn new(time: ClockTime) -> Self {
        Self {
            display: time.display(),
            time,
        }
    }
}

impl From<ClockTime> for TimeEntry {
    fn from(time: ClockTime) -> Self {
        Self::new(time)
    }
}
