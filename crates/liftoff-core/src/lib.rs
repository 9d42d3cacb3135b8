//! Core library for the Liftoff release checklist tracker.
//!
//! A release has a name, a due date, optional notes and a set of completed
//! steps drawn from a fixed checklist ([`catalog`]). Its status (planned,
//! ongoing, done) is derived from that set and never stored.
//!
//! # Layers
//!
//! - [`rules`]: pure validation and normalization of the release aggregate
//! - [`db`]: SQLite gateway, one connection per call
//! - [`tracker`]: async API used by the CLI and the MCP server
//! - [`display`]: markdown formatting of models and operation results
//! - [`calendar`]: converting date-only input into due instants
//!
//! # Quick Start
//!
//! ```rust
//! use liftoff_core::{params::CreateRelease, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let release = tracker
//!     .create_release(&CreateRelease {
//!         name: "v1.2.0".to_string(),
//!         due_date: "2025-06-01T00:00:00.000Z".to_string(),
//!         additional_info: Some("First release after the rewrite".to_string()),
//!         completed_step_ids: vec![],
//!     })
//!     .await?;
//! println!("{release}");
//!
//! for release in &tracker.release_overview().await? {
//!     println!("{}: {}", release.name, release.status());
//! }
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod rules;
pub mod tracker;

// Re-export commonly used types
pub use catalog::{ReleaseStep, RELEASE_STEPS};
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, IsoTimestamp, LocalDateTime, OperationStatus, Releases,
    StepCatalog, UpdateResult,
};
pub use error::{Result, TrackerError};
pub use models::{Release, ReleaseStatus};
pub use params::{CreateRelease, Id, SetReleaseStep, UpdateReleaseInfo};
pub use tracker::{ReleaseTracker, TrackerBuilder};
