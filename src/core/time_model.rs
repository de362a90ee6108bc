//! Time-of-day arithmetic on an implicit reference day.
//!
//! A `ClockTime` is resolved to a `ClockInstant`: seconds since midnight plus
//! an explicit day counter. No calendar or timezone is involved, so results
//! never depend on when the computation runs.

use crate::models::ClockTime;
use serde::Serialize;
use std::iter::Sum;
use std::ops::Add;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Point in time relative to midnight of the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockInstant {
    // field order matters for the derived Ord
    day: u32,
    second_of_day: u32,
}

impl ClockInstant {
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn second_of_day(&self) -> u32 {
        self.second_of_day
    }

    /// Same time of day, one day later.
    pub fn next_day(&self) -> Self {
        Self {
            day: self.day + 1,
            second_of_day: self.second_of_day,
        }
    }

    pub fn seconds_since_reference(&self) -> u64 {
        self.day as u64 * SECONDS_PER_DAY + self.second_of_day as u64
    }
}

/// Non-negative duration in whole seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Elapsed {
    seconds: u64,
}

impl Elapsed {
    pub const ZERO: Elapsed = Elapsed { seconds: 0 };

    pub fn from_seconds(seconds: u64) -> Self {
        Self { seconds }
    }

    pub fn as_seconds(&self) -> u64 {
        self.seconds
    }

    /// Whole hours, may exceed 24.
    pub fn hours(&self) -> u64 {
        self.seconds / SECONDS_PER_HOUR
    }

    /// Remaining whole minutes (0..=59).
    pub fn minutes(&self) -> u64 {
        (self.seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
    }

    /// `"11 hours 37 minutes"`; seconds are dropped.
    pub fn to_long(&self) -> String {
        format!("{} hours {} minutes", self.hours(), self.minutes())
    }

    /// `"11:37"`; hours are padded to two digits but never truncated.
    pub fn to_hhmm(&self) -> String {
        format!("{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl Add for Elapsed {
    type Output = Elapsed;

    fn add(self, rhs: Elapsed) -> Elapsed {
        Elapsed::from_seconds(self.seconds + rhs.seconds)
    }
}

impl Sum for Elapsed {
    fn sum<I: Iterator<Item = Elapsed>>(iter: I) -> Self {
        iter.fold(Elapsed::ZERO, |acc, e| acc + e)
    }
}

impl<'a> Sum<&'a Elapsed> for Elapsed {
    fn sum<I: Iterator<Item = &'a Elapsed>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Map a clock triple onto the reference day (day 0).
pub fn resolve(clock: &ClockTime) -> ClockInstant {
    let second_of_day =
        clock.hour_24() * SECONDS_PER_HOUR as u32 + clock.minute() * SECONDS_PER_MINUTE as u32;

    ClockInstant {
        day: 0,
        second_of_day,
    }
}

/// `target - start`, moving `target` to the next day when it precedes `start`.
pub fn elapsed(start: ClockInstant, target: ClockInstant) -> Elapsed {
    let target = if target < start {
        target.next_day()
    } else {
        target
    };

    Elapsed::from_seconds(
        target
            .seconds_since_reference()
            .saturating_sub(start.seconds_since_reference()),
    )
}

/// Shortcut for `elapsed(resolve(start), resolve(target))`.
pub fn elapsed_between(start: &ClockTime, target: &ClockTime) -> Elapsed {
    elapsed(resolve(start), resolve(target))
}
