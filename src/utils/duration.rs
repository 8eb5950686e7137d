//! Seconds-to-duration decomposition
//!
//! Splits a number of seconds into days, hours, minutes and seconds. Every
//! division is floored, so negative inputs decompose the same way a
//! `floor()`-based calculation would.

use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::error::{FormatError, FormatResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole days in `total_seconds`
#[must_use]
pub fn seconds_to_days(total_seconds: i64) -> i64 {
    total_seconds.div_euclid(SECONDS_PER_DAY)
}

/// Whole hours in `total_seconds`
///
/// With `exclude_days` the hours already accounted for by whole days are
/// dropped, giving a value in `0..24`. Without it the total hour count is
/// returned.
#[must_use]
pub fn seconds_to_hours(total_seconds: i64, exclude_days: bool) -> i64 {
    if exclude_days {
        total_seconds.rem_euclid(SECONDS_PER_DAY) / SECONDS_PER_HOUR
    } else {
        total_seconds.div_euclid(SECONDS_PER_HOUR)
    }
}

/// Whole minutes in `total_seconds`
///
/// With `exclude_hours` the result is in `0..60`.
#[must_use]
pub fn seconds_to_minutes(total_seconds: i64, exclude_hours: bool) -> i64 {
    if exclude_hours {
        total_seconds.rem_euclid(SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
    } else {
        total_seconds.div_euclid(SECONDS_PER_MINUTE)
    }
}

/// Remaining seconds in `total_seconds`
///
/// With `exclude_minutes` the result is in `0..60`; otherwise the input is
/// returned unchanged.
#[must_use]
pub fn seconds_to_seconds(total_seconds: i64, exclude_minutes: bool) -> i64 {
    if exclude_minutes {
        total_seconds.rem_euclid(SECONDS_PER_MINUTE)
    } else {
        total_seconds
    }
}

/// Parse a textual seconds count
///
/// Surrounding whitespace is ignored. Anything that is not an integer is
/// rejected instead of being coerced to zero.
pub fn parse_seconds(text: &str) -> FormatResult<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FormatError::EmptyInput);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| FormatError::InvalidInput(format!("'{}' is not a whole number of seconds", text)))
}

/// A seconds count broken down into days, hours, minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl DurationParts {
    /// Decompose `total_seconds` with every component excluding the larger ones
    pub fn from_seconds(total_seconds: i64) -> Self {
        Self {
            days: seconds_to_days(total_seconds),
            hours: seconds_to_hours(total_seconds, true),
            minutes: seconds_to_minutes(total_seconds, true),
            seconds: seconds_to_seconds(total_seconds, true),
        }
    }

    /// Recombine the parts into a total number of seconds
    ///
    /// Returns `None` when the total does not fit in an `i64`. Parts built by
    /// [`DurationParts::from_seconds`] always recombine.
    pub fn total_seconds(&self) -> Option<i64> {
        let total = i128::from(self.days) * i128::from(SECONDS_PER_DAY)
            + i128::from(self.hours) * i128::from(SECONDS_PER_HOUR)
            + i128::from(self.minutes) * i128::from(SECONDS_PER_MINUTE)
            + i128::from(self.seconds);
        i64::try_from(total).ok()
    }
}

impl fmt::Display for DurationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {}h {}m {}s", self.days, self.hours, self.minutes, self.seconds)
    }
}
