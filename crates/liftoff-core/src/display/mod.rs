//! Display formatting for releases and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers format collections and operation outcomes. Everything
//! renders as markdown so the CLI can pass it through its terminal renderer
//! and the MCP server can return it verbatim.
//!
//! - [`collections`]: [`Releases`] listings and the [`StepCatalog`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`] confirmations
//! - [`datetime`]: [`LocalDateTime`] and [`IsoTimestamp`]

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Releases, StepCatalog};
pub use datetime::{IsoTimestamp, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
