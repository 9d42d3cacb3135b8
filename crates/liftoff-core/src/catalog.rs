//! The fixed checklist every release is tracked against.
//!
//! The catalog is an immutable, process-wide constant. Its order is the
//! canonical order used when normalizing completed step sets and when
//! rendering checklists, so anything that needs to know "is this a step" or
//! "which step comes first" asks this module instead of keeping its own list.

use serde::Serialize;

/// One checklist item of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReleaseStep {
    /// Opaque, stable identifier
    pub id: &'static str,
    /// Human readable label
    pub label: &'static str,
}

/// Checklist steps in canonical order.
pub const RELEASE_STEPS: [ReleaseStep; 8] = [
    ReleaseStep {
        id: "code_freeze",
        label: "Code freeze complete",
    },
    ReleaseStep {
        id: "qa_signoff",
        label: "QA sign-off complete",
    },
    ReleaseStep {
        id: "security_review",
        label: "Security review complete",
    },
    ReleaseStep {
        id: "changelog_ready",
        label: "Changelog prepared",
    },
    ReleaseStep {
        id: "rollout_plan",
        label: "Rollout plan validated",
    },
    ReleaseStep {
        id: "database_migration",
        label: "Database migration verified",
    },
    ReleaseStep {
        id: "monitoring_ready",
        label: "Monitoring checks ready",
    },
    ReleaseStep {
        id: "post_release_owner",
        label: "Post-release owner assigned",
    },
];

/// Returns the whole catalog.
pub fn release_steps() -> &'static [ReleaseStep] {
    &RELEASE_STEPS
}

/// Step identifiers in canonical order.
pub fn step_ids() -> impl Iterator<Item = &'static str> {
    RELEASE_STEPS.iter().map(|step| step.id)
}

/// Looks up a step by identifier.
pub fn find_step(id: &str) -> Option<&'static ReleaseStep> {
    RELEASE_STEPS.iter().find(|step| step.id == id)
}

/// Whether `id` names a catalog step.
pub fn is_known_step(id: &str) -> bool {
    find_step(id).is_some()
}

/// Canonical index of a step.
pub fn step_position(id: &str) -> Option<usize> {
    RELEASE_STEPS.iter().position(|step| step.id == id)
}
