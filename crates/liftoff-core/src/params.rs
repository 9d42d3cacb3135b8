//! Parameter structures for tracker operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework derives beyond serde. Interfaces wrap them with their own types
//! (clap `Args`, transparent MCP wrappers) and convert with `.into()`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schemas are derived only when the `schema` feature is enabled.
//!
//! Text fields hold raw user input. Trimming, validation and normalization
//! happen in [`crate::rules`] when the tracker processes the request.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
///
/// Used by show_release and delete_release.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the release to operate on
    pub id: u64,
}

/// Parameters for creating a new release.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateRelease {
    /// Release name, trimmed; must not be blank
    pub name: String,
    /// Due date as an ISO-8601 instant, e.g. `2025-06-01T00:00:00.000Z`
    pub due_date: String,
    /// Optional free-text notes
    #[serde(default)]
    pub additional_info: Option<String>,
    /// Checklist steps to tick right after creation
    #[serde(default)]
    pub completed_step_ids: Vec<String>,
}

/// Parameters for ticking or unticking one checklist step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetReleaseStep {
    /// ID of the release to change
    pub release_id: u64,
    /// Catalog identifier of the step, e.g. `code_freeze`
    pub step_id: String,
    /// `true` marks the step done, `false` marks it pending
    pub checked: bool,
}

/// Parameters for replacing the notes of a release.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateReleaseInfo {
    /// ID of the release to change
    pub release_id: u64,
    /// New notes; omitted or blank clears them
    #[serde(default)]
    pub additional_info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_release_defaults() {
        let params: CreateRelease =
            serde_json::from_str(r#"{"name":"v1","due_date":"2025-06-01T00:00:00.000Z"}"#)
                .unwrap();
        assert_eq!(params.name, "v1");
        assert!(params.additional_info.is_none());
        assert!(params.completed_step_ids.is_empty());
    }

    #[test]
    fn test_update_release_info_without_notes() {
        let params: UpdateReleaseInfo = serde_json::from_str(r#"{"release_id":4}"#).unwrap();
        assert_eq!(params.release_id, 4);
        assert!(params.additional_info.is_none());
    }
}
