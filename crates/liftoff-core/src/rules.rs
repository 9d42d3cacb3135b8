//! Business rules of the release aggregate.
//!
//! Everything here is pure: no storage access, no clock. Validation failures
//! come back as named [`TrackerError`]s; the only silent corrections are the
//! documented normalizations (trimming text, filtering and reordering step
//! identifiers).

use std::collections::HashSet;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

use crate::{
    catalog,
    error::{Result, TrackerError},
    models::ReleaseStatus,
};

/// Longest accepted release name, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Trims a release name and rejects it when nothing is left.
pub fn validate_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(TrackerError::invalid_input("name").with_reason("name required"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(TrackerError::invalid_input("name")
            .with_reason(format!("name must be at most {MAX_NAME_LENGTH} characters")));
    }
    Ok(name.to_string())
}

/// Parses an ISO-8601 due date.
///
/// Accepts an instant with `Z` or a numeric offset, or a bare date read as
/// midnight UTC. A date-time without an offset is rejected: its instant
/// depends on a zone the caller never named. The result is truncated to
/// millisecond precision, which is what the store keeps.
///
/// # Examples
///
/// ```rust
/// use liftoff_core::rules::validate_due_date;
///
/// let due = validate_due_date("2025-06-01T00:00:00.000Z")?;
/// assert_eq!(due.to_string(), "2025-06-01T00:00:00Z");
/// assert!(validate_due_date("2025-06-01T00:00:00").is_err());
/// assert!(validate_due_date("next tuesday").is_err());
/// # Ok::<(), liftoff_core::TrackerError>(())
/// ```
pub fn validate_due_date(raw: &str) -> Result<Timestamp> {
    let invalid = || TrackerError::invalid_input("due_date").with_reason("invalid due date");
    let raw = raw.trim();

    let instant = if let Ok(ts) = raw.parse::<Timestamp>() {
        ts
    } else if is_bare_date(raw) {
        let date = raw.parse::<Date>().map_err(|_| invalid())?;
        date.to_zoned(TimeZone::UTC).map_err(|_| invalid())?.timestamp()
    } else {
        return Err(invalid());
    };

    Timestamp::from_millisecond(instant.as_millisecond()).map_err(|_| invalid())
}

/// `Date` parsing also accepts a full date-time and drops the time, so bare
/// dates are told apart by shape first.
fn is_bare_date(raw: &str) -> bool {
    raw.len() == 10 && !raw.contains(['T', 't', ' '])
}

/// Trims optional notes; blank input means "no notes".
pub fn normalize_additional_info(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
}

/// Keeps catalog identifiers only, once each, in catalog order.
///
/// Applied to caller input and to stored rows alike, so retired or
/// hand-edited identifiers never surface.
pub fn normalize_completed_step_ids<I, S>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let selected: HashSet<String> = ids
        .into_iter()
        .map(|id| id.as_ref().to_string())
        .collect();

    catalog::step_ids()
        .filter(|id| selected.contains(*id))
        .map(String::from)
        .collect()
}

/// Derives the status of a completed step set.
///
/// Only catalog identifiers count, so an unnormalized set yields the same
/// answer as its normalized form.
pub fn compute_status<S: AsRef<str>>(completed_step_ids: &[S]) -> ReleaseStatus {
    let completed = catalog::step_ids()
        .filter(|id| completed_step_ids.iter().any(|done| done.as_ref() == *id))
        .count();

    if completed == 0 {
        ReleaseStatus::Planned
    } else if completed == catalog::release_steps().len() {
        ReleaseStatus::Done
    } else {
        ReleaseStatus::Ongoing
    }
}

/// Ticks or unticks one step and returns the renormalized set.
pub fn apply_step_toggle<S: AsRef<str>>(
    current: &[S],
    step_id: &str,
    checked: bool,
) -> Result<Vec<String>> {
    if !catalog::is_known_step(step_id) {
        return Err(TrackerError::UnknownStep {
            step_id: step_id.to_string(),
        });
    }

    let mut next: Vec<&str> = current
        .iter()
        .map(AsRef::as_ref)
        .filter(|id| *id != step_id)
        .collect();
    if checked {
        next.push(step_id);
    }

    Ok(normalize_completed_step_ids(next))
}

/// Parses a release identifier given as text. Identifiers start at 1.
pub fn parse_release_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| TrackerError::invalid_input("release_id").with_reason("Invalid release id."))
}
