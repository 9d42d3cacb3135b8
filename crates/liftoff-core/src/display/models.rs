//! Display implementations for domain models.
//!
//! Releases render as markdown: a header with ID and name, a metadata list,
//! the notes as a paragraph, then the checklist in catalog order.

use std::fmt;

use super::datetime::{IsoTimestamp, LocalDateTime};
use crate::{
    catalog::{self, ReleaseStep},
    models::{Release, ReleaseStatus},
};

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ReleaseStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (`{}`)", self.label, self.id)
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (completed, total) = self.progress();

        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(
            f,
            "- Status: {} ({completed}/{total})",
            self.status().with_icon()
        )?;
        writeln!(f, "- Due: {}", IsoTimestamp(&self.due_date))?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(info) = &self.additional_info {
            writeln!(f)?;
            writeln!(f, "{info}")?;
        }

        writeln!(f, "\n## Checklist")?;
        writeln!(f)?;
        for step in catalog::release_steps() {
            let mark = if self.is_step_completed(step.id) { "x" } else { " " };
            writeln!(f, "- [{mark}] {step}")?;
        }

        Ok(())
    }
}

impl Release {
    /// Compact listing format used by [`super::Releases`].
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (completed, total) = self.progress();

        writeln!(
            f,
            "## {} (ID: {}) [{} {completed}/{total}]",
            self.name,
            self.id,
            self.status()
        )?;
        writeln!(f)?;
        writeln!(f, "- **Due**: {}", IsoTimestamp(&self.due_date))?;
        if let Some(info) = &self.additional_info {
            writeln!(f, "- **Notes**: {info}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}
