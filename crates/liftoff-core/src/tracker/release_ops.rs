//! Release operations for the ReleaseTracker.
//!
//! Thin async bridges to the [`Database`] gateway. Each one opens a fresh
//! connection on tokio's blocking pool; the rules live in the handlers.

use jiff::Timestamp;
use tokio::task;

use super::ReleaseTracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::Release,
    params::Id,
};

impl ReleaseTracker {
    /// Lists all releases, latest due date first.
    pub async fn list_releases(&self) -> Result<Vec<Release>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_releases()
        })
        .await
        .map_err(TrackerError::join)?
    }

    /// Retrieves a release by its ID.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::ReleaseNotFound` if the release does not exist.
    pub async fn get_release(&self, params: &Id) -> Result<Release> {
        let db_path = self.db_path.clone();
        let release_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_release(release_id)
        })
        .await
        .map_err(TrackerError::join)?
    }

    /// Permanently deletes a release, reporting whether a row was removed.
    pub async fn delete_release_by_id(&self, params: &Id) -> Result<bool> {
        let db_path = self.db_path.clone();
        let release_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_release(release_id)
        })
        .await
        .map_err(TrackerError::join)?
    }

    /// Inserts an already validated release with its initial steps.
    pub(crate) async fn insert_release(
        &self,
        name: String,
        due_date: Timestamp,
        additional_info: Option<String>,
        completed_step_ids: Vec<String>,
    ) -> Result<Release> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_release(
                &name,
                due_date,
                additional_info.as_deref(),
                &completed_step_ids,
            )
        })
        .await
        .map_err(TrackerError::join)?
    }

    /// Persists a completed step set.
    pub(crate) async fn store_completed_steps(
        &self,
        release_id: u64,
        step_ids: Vec<String>,
    ) -> Result<Release> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_completed_steps(release_id, &step_ids)
        })
        .await
        .map_err(TrackerError::join)?
    }

    /// Persists new notes.
    pub(crate) async fn store_additional_info(
        &self,
        release_id: u64,
        additional_info: Option<String>,
    ) -> Result<Release> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_additional_info(release_id, additional_info.as_deref())
        })
        .await
        .map_err(TrackerError::join)?
    }
}
