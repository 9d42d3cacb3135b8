//! Calendar-day helpers for interfaces that collect a date without a time.
//!
//! A release form asks for a day, while the aggregate stores an instant. The
//! contract is that a day always maps to the first instant of that day in the
//! user's time zone, expressed in UTC.

use jiff::{civil::Date, tz::TimeZone, Timestamp};

use crate::{
    display::IsoTimestamp,
    error::{Result, TrackerError},
};

/// First instant of `day` in `tz`.
///
/// That is local midnight, or the first valid instant when a DST transition
/// skips midnight.
///
/// # Examples
///
/// ```rust
/// use jiff::{civil::date, tz::{self, TimeZone}};
/// use liftoff_core::calendar::due_date_for_day;
///
/// let tz = TimeZone::fixed(tz::offset(9));
/// let due = due_date_for_day(date(2025, 6, 1), &tz)?;
/// assert_eq!(due.to_string(), "2025-05-31T15:00:00Z");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn due_date_for_day(day: Date, tz: &TimeZone) -> Result<Timestamp> {
    day.to_zoned(tz.clone())
        .map(|zoned| zoned.timestamp())
        .map_err(|e| {
            TrackerError::invalid_input("due_date").with_reason(format!("invalid due date: {e}"))
        })
}

/// Tomorrow's date in `tz`, the default due day for a new release.
pub fn default_due_day(tz: &TimeZone) -> Result<Date> {
    Timestamp::now()
        .to_zoned(tz.clone())
        .date()
        .tomorrow()
        .map_err(|e| TrackerError::Configuration {
            message: format!("Cannot compute default due date: {e}"),
        })
}

/// Turns user input into the ISO string the rules expect.
///
/// A bare `YYYY-MM-DD` becomes the start of that day in `tz`. Anything else
/// is returned unchanged for [`crate::rules::validate_due_date`] to judge.
pub fn resolve_due_input(raw: &str, tz: &TimeZone) -> Result<String> {
    let trimmed = raw.trim();
    match trimmed.parse::<Date>() {
        Ok(day) if trimmed.len() == 10 => {
            let due = due_date_for_day(day, tz)?;
            Ok(IsoTimestamp(&due).to_string())
        }
        _ => Ok(raw.to_string()),
    }
}
