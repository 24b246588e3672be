//! Day-window arithmetic and time-of-day validation.
//!
//! Stored dates may carry arbitrary time-of-day noise from clients (a shift
//! created from a date picker serializes as midnight local time, an imported
//! one may carry 14:30). Every "same day" decision in the workspace goes
//! through this module so the shift/block mutual-exclusion rule and the
//! calendar grid agree on what a day is.
//!
//! Days are UTC. A day window is half-open: `[00:00:00, next day 00:00:00)`.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::CoreError;
use crate::types::Timestamp;

/// The UTC calendar day containing `at`.
pub fn utc_day(at: Timestamp) -> NaiveDate {
    at.date_naive()
}

/// The UTC day window containing `at`, as a half-open `[start, end)` pair.
///
/// Storage backends turn this into `date >= start AND date < end`.
pub fn day_bounds(at: Timestamp) -> (Timestamp, Timestamp) {
    let start = utc_day(at).and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(1))
}

/// Whether two timestamps fall in the same UTC day window.
pub fn same_day(a: Timestamp, b: Timestamp) -> bool {
    utc_day(a) == utc_day(b)
}

/// Parse a `HH:MM` wall-clock string into `(hour, minute)`.
///
/// Strict two-digit form: `"9:30"`, `"09:3"`, and `"24:00"` are all rejected.
pub fn parse_time(value: &str) -> Option<(u32, u32)> {
    let (hh, mm) = value.split_once(':')?;
    let hour = two_digits(hh)?;
    let minute = two_digits(mm)?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}

/// Validate a `HH:MM` field, naming the offending field in the error.
pub fn validate_time(field: &'static str, value: &str) -> Result<(), CoreError> {
    if parse_time(value).is_some() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be a HH:MM time, got '{value}'"
        )))
    }
}

fn two_digits(s: &str) -> Option<u32> {
    let b = s.as_bytes();
    if b.len() == 2 && b[0].is_ascii_digit() && b[1].is_ascii_digit() {
        Some(u32::from(b[0] - b'0') * 10 + u32::from(b[1] - b'0'))
    } else {
        None
    }
}
