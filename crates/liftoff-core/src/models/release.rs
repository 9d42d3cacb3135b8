//! Release model definition and related functionality.

use jiff::Timestamp;
use serde::{ser::SerializeStruct, Serialize, Serializer};

use super::ReleaseStatus;
use crate::{catalog, display::IsoTimestamp, rules};

/// A tracked release with its checklist progress.
///
/// `completed_step_ids` is always normalized when a release comes out of the
/// store. The status is not a field: it is derived from the completed set
/// each time [`Release::status`] is called, so it cannot go stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Unique identifier assigned by storage
    pub id: u64,

    /// Trimmed, non-empty release name
    pub name: String,

    /// Due date as a UTC instant with millisecond precision
    pub due_date: Timestamp,

    /// Optional free-text notes, never blank
    pub additional_info: Option<String>,

    /// Completed step identifiers in catalog order
    pub completed_step_ids: Vec<String>,

    /// Timestamp when the release was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the release was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Release {
    /// Status derived from the completed steps.
    pub fn status(&self) -> ReleaseStatus {
        rules::compute_status(&self.completed_step_ids)
    }

    /// Whether the given step is ticked.
    pub fn is_step_completed(&self, step_id: &str) -> bool {
        self.completed_step_ids.iter().any(|id| id == step_id)
    }

    /// Number of completed steps and size of the catalog.
    pub fn progress(&self) -> (usize, usize) {
        let completed = catalog::step_ids()
            .filter(|id| self.is_step_completed(id))
            .count();
        (completed, catalog::release_steps().len())
    }
}

impl Serialize for Release {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Release", 8)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("due_date", &IsoTimestamp(&self.due_date).to_string())?;
        state.serialize_field("additional_info", &self.additional_info)?;
        state.serialize_field("completed_step_ids", &self.completed_step_ids)?;
        state.serialize_field("status", &self.status())?;
        state.serialize_field("created_at", &IsoTimestamp(&self.created_at).to_string())?;
        state.serialize_field("updated_at", &IsoTimestamp(&self.updated_at).to_string())?;
        state.end()
    }
}
