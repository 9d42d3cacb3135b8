//! Release handlers that apply the business rules for the ReleaseTracker.

use super::ReleaseTracker;
use crate::{
    catalog::{self, ReleaseStep},
    display::Releases,
    error::{Result, TrackerError},
    models::Release,
    params::{CreateRelease, Id, SetReleaseStep, UpdateReleaseInfo},
    rules,
};

impl ReleaseTracker {
    /// The fixed checklist every release is measured against.
    pub fn list_steps(&self) -> &'static [ReleaseStep] {
        catalog::release_steps()
    }

    /// Handle listing releases for display.
    ///
    /// Wraps the listing so each entry renders with its status and progress.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use liftoff_core::TrackerBuilder;
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let overview = tracker.release_overview().await?;
    /// println!("{overview}");
    /// # Result::<(), liftoff_core::TrackerError>::Ok(())
    /// # };
    /// ```
    pub async fn release_overview(&self) -> Result<Releases> {
        Ok(Releases(self.list_releases().await?))
    }

    /// Handle creating a new release.
    ///
    /// The name is checked before the due date and the first failure aborts
    /// before anything is written. Steps listed in
    /// `params.completed_step_ids` are checked against the catalog and then
    /// stored by the same insert as the release, so the create either
    /// succeeds as a whole or leaves nothing behind.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` for a blank or overlong name or an
    /// unparseable due date, and `TrackerError::UnknownStep` for a step
    /// outside the catalog.
    pub async fn create_release(&self, params: &CreateRelease) -> Result<Release> {
        let name = rules::validate_name(&params.name)?;
        let due_date = rules::validate_due_date(&params.due_date)?;
        let additional_info = rules::normalize_additional_info(params.additional_info.as_deref());

        if let Some(unknown) = params
            .completed_step_ids
            .iter()
            .find(|id| !catalog::is_known_step(id))
        {
            return Err(TrackerError::UnknownStep {
                step_id: unknown.clone(),
            });
        }

        log::debug!("Creating release '{name}' due {due_date}");
        self.insert_release(
            name,
            due_date,
            additional_info,
            params.completed_step_ids.clone(),
        )
        .await
    }

    /// Handle ticking or unticking one checklist step.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::ReleaseNotFound` if the release does not exist
    /// and `TrackerError::UnknownStep` if the step is not in the catalog. In
    /// both cases nothing is written.
    pub async fn set_release_step(&self, params: &SetReleaseStep) -> Result<Release> {
        let current = self.get_release(&Id { id: params.release_id }).await?;
        let next =
            rules::apply_step_toggle(&current.completed_step_ids, &params.step_id, params.checked)?;

        log::debug!(
            "Setting step '{}' of release {} to {}",
            params.step_id,
            params.release_id,
            params.checked
        );
        self.store_completed_steps(params.release_id, next).await
    }

    /// Handle replacing the notes of a release.
    ///
    /// Blank or missing notes clear the field.
    pub async fn update_release_info(&self, params: &UpdateReleaseInfo) -> Result<Release> {
        self.get_release(&Id { id: params.release_id }).await?;
        let additional_info = rules::normalize_additional_info(params.additional_info.as_deref());

        log::debug!("Updating notes of release {}", params.release_id);
        self.store_additional_info(params.release_id, additional_info)
            .await
    }

    /// Handle permanently deleting a release.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::DeletionFailed` if no row was removed, which
    /// includes deleting an ID that never existed.
    pub async fn delete_release(&self, params: &Id) -> Result<()> {
        log::debug!("Deleting release {}", params.id);
        if self.delete_release_by_id(params).await? {
            Ok(())
        } else {
            Err(TrackerError::DeletionFailed { id: params.id })
        }
    }
}
