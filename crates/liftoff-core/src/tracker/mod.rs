//! High-level tracker API for managing releases.
//!
//! [`ReleaseTracker`] is the single entry point the CLI and the MCP server
//! talk to. It validates input with [`crate::rules`], persists through
//! [`crate::db::Database`] and returns models or display wrappers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │   (handlers)    │───▶│  (release_ops)  │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Rules & results       Blocking bridge        Data persistence
//! ```
//!
//! Every call opens its own connection on tokio's blocking pool, so calls
//! share no state. There is no transaction spanning two calls: concurrent
//! toggles on the same release are last-write-wins.
//!
//! # Usage
//!
//! ```rust
//! use liftoff_core::{params::{CreateRelease, SetReleaseStep}, ReleaseStatus, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("releases.db"))
//!     .build()
//!     .await?;
//!
//! let release = tracker
//!     .create_release(&CreateRelease {
//!         name: "v1.2.0".to_string(),
//!         due_date: "2025-06-01T00:00:00.000Z".to_string(),
//!         additional_info: None,
//!         completed_step_ids: vec![],
//!     })
//!     .await?;
//! assert_eq!(release.status(), ReleaseStatus::Planned);
//!
//! let release = tracker
//!     .set_release_step(&SetReleaseStep {
//!         release_id: release.id,
//!         step_id: "code_freeze".to_string(),
//!         checked: true,
//!     })
//!     .await?;
//! assert_eq!(release.status(), ReleaseStatus::Ongoing);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod builder;
pub mod handlers;
pub mod release_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;

/// Main tracker interface for managing releases.
#[derive(Debug, Clone)]
pub struct ReleaseTracker {
    pub(crate) db_path: PathBuf,
}

impl ReleaseTracker {
    /// Creates a new tracker with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite file this tracker writes to.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }
}
