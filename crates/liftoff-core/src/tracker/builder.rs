//! Builder for creating and configuring ReleaseTracker instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::ReleaseTracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
};

/// Builder for creating and configuring ReleaseTracker instances.
#[derive(Debug, Clone)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/liftoff/liftoff.db` or `~/.local/share/liftoff/liftoff.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured tracker, creating the schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the parent directory cannot be
    /// created, `TrackerError::XdgDirectory` if no default path can be
    /// resolved, and `TrackerError::Database` if initialization fails.
    pub async fn build(self) -> Result<ReleaseTracker> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TrackerError>(())
        })
        .await
        .map_err(TrackerError::join)??;

        log::debug!("Release tracker ready at {}", db_path.display());
        Ok(ReleaseTracker::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("liftoff")
            .place_data_file("liftoff.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
