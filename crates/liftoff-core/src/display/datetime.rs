//! DateTime display utilities.
//!
//! This module provides wrapper types for formatting timestamps either in the
//! system timezone for people, or in canonical UTC ISO-8601 for machines.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Canonical ISO-8601 rendering of an instant: UTC, millisecond precision,
/// `Z` suffix.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use liftoff_core::display::IsoTimestamp;
///
/// let ts: Timestamp = "2025-06-01T00:00:00Z".parse().unwrap();
/// assert_eq!(IsoTimestamp(&ts).to_string(), "2025-06-01T00:00:00.000Z");
/// ```
pub struct IsoTimestamp<'a>(pub &'a Timestamp);

impl fmt::Display for IsoTimestamp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let utc = self.0.to_zoned(TimeZone::UTC);
        write!(
            f,
            "{}.{:03}Z",
            utc.strftime("%Y-%m-%dT%H:%M:%S"),
            utc.millisecond()
        )
    }
}
