//! Data models for releases.
//!
//! The release aggregate is a single persisted row plus a status that is
//! derived on demand. Display implementations for these models live in
//! [`crate::display::models`] so presentation stays out of the data types.
//!
//! # Examples
//!
//! ```rust
//! use liftoff_core::models::{Release, ReleaseStatus};
//! use jiff::Timestamp;
//!
//! let release = Release {
//!     id: 1,
//!     name: "v1.2.0".to_string(),
//!     due_date: "2025-06-01T00:00:00Z".parse::<Timestamp>().unwrap(),
//!     additional_info: None,
//!     completed_step_ids: vec!["code_freeze".to_string()],
//! #   created_at: Timestamp::now(),
//! #   updated_at: Timestamp::now(),
//! };
//! assert_eq!(release.status(), ReleaseStatus::Ongoing);
//! assert_eq!(release.progress(), (1, 8));
//! ```

pub mod release;
pub mod status;


pub use release::Release;
pub use status::ReleaseStatus;
