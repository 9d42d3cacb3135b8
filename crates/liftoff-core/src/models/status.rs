//! Derived release status.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Progress label derived from a release's completed steps.
///
/// Never stored: see [`crate::rules::compute_status`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseStatus {
    /// No step has been completed yet
    Planned,

    /// Some, but not all, steps are complete
    Ongoing,

    /// Every catalog step is complete
    Done,
}

impl FromStr for ReleaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(ReleaseStatus::Planned),
            "ongoing" => Ok(ReleaseStatus::Ongoing),
            "done" => Ok(ReleaseStatus::Done),
            _ => Err(format!("Invalid release status: {s}")),
        }
    }
}

impl ReleaseStatus {
    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseStatus::Planned => "planned",
            ReleaseStatus::Ongoing => "ongoing",
            ReleaseStatus::Done => "done",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftoff_core::models::ReleaseStatus;
    ///
    /// assert_eq!(ReleaseStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(ReleaseStatus::Ongoing.with_icon(), "➤ Ongoing");
    /// assert_eq!(ReleaseStatus::Planned.with_icon(), "○ Planned");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ReleaseStatus::Done => "✓ Done",
            ReleaseStatus::Ongoing => "➤ Ongoing",
            ReleaseStatus::Planned => "○ Planned",
        }
    }
}
