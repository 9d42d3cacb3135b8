//! Release CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Transaction};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::Release,
    rules,
};

const RELEASE_COLUMNS: &str =
    "id, name, due_date, additional_info, completed_step_ids, created_at, updated_at";
const INSERT_RELEASE_SQL: &str = "INSERT INTO releases (name, due_date, additional_info, completed_step_ids, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_COMPLETED_STEPS_SQL: &str =
    "UPDATE releases SET completed_step_ids = ?1, updated_at = ?2 WHERE id = ?3";
const UPDATE_ADDITIONAL_INFO_SQL: &str =
    "UPDATE releases SET additional_info = ?1, updated_at = ?2 WHERE id = ?3";
const DELETE_RELEASE_SQL: &str = "DELETE FROM releases WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Release from a database row.
    ///
    /// Notes and completed steps are renormalized here, so rows written by
    /// older versions or edited by hand still satisfy the aggregate rules.
    fn build_release_from_row(row: &rusqlite::Row) -> rusqlite::Result<Release> {
        let due_millis: i64 = row.get(2)?;
        let due_date = Timestamp::from_millisecond(due_millis)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Integer, Box::new(e)))?;

        let additional_info: Option<String> = row.get(3)?;
        let stored_steps: String = row.get(4)?;

        Ok(Release {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            due_date,
            additional_info: rules::normalize_additional_info(additional_info.as_deref()),
            completed_step_ids: rules::normalize_completed_step_ids(decode_step_ids(
                &stored_steps,
            )),
            created_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
        })
    }

    fn select_release(tx: &Transaction<'_>, id: u64) -> Result<Option<Release>> {
        tx.query_row(
            &format!("SELECT {RELEASE_COLUMNS} FROM releases WHERE id = ?1"),
            params![id as i64],
            Self::build_release_from_row,
        )
        .optional()
        .db_context("Failed to query release")
    }

    /// Lists every release, latest due date first, ties broken by the higher
    /// ID.
    pub fn list_releases(&self) -> Result<Vec<Release>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {RELEASE_COLUMNS} FROM releases ORDER BY due_date DESC, id DESC"
            ))
            .db_context("Failed to prepare query")?;

        let releases = stmt
            .query_map([], Self::build_release_from_row)
            .db_context("Failed to query releases")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch releases")?;

        Ok(releases)
    }

    /// Retrieves a release by its ID.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::ReleaseNotFound` if no row has that ID.
    pub fn get_release(&self, id: u64) -> Result<Release> {
        self.connection
            .query_row(
                &format!("SELECT {RELEASE_COLUMNS} FROM releases WHERE id = ?1"),
                params![id as i64],
                Self::build_release_from_row,
            )
            .optional()
            .db_context("Failed to query release")?
            .ok_or(TrackerError::ReleaseNotFound { id })
    }

    /// Inserts a new release together with its initially completed steps.
    ///
    /// The step set is normalized and written by the same `INSERT`, so a
    /// failed create leaves no row behind.
    pub fn create_release(
        &mut self,
        name: &str,
        due_date: Timestamp,
        additional_info: Option<&str>,
        completed_step_ids: &[String],
    ) -> Result<Release> {
        let encoded_steps =
            serde_json::to_string(&rules::normalize_completed_step_ids(completed_step_ids))?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let additional_info = rules::normalize_additional_info(additional_info);

        tx.execute(
            INSERT_RELEASE_SQL,
            params![
                name,
                due_date.as_millisecond(),
                additional_info.as_deref(),
                encoded_steps,
                &now,
                &now
            ],
        )
        .db_context("Failed to insert release")?;

        let id = tx.last_insert_rowid() as u64;
        let release = Self::select_release(&tx, id)?.ok_or(TrackerError::ReleaseNotFound { id })?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(release)
    }

    /// Replaces the completed step set of a release.
    ///
    /// The set is normalized before it is written.
    pub fn update_completed_steps(&mut self, id: u64, step_ids: &[String]) -> Result<Release> {
        let normalized = rules::normalize_completed_step_ids(step_ids);
        let encoded = serde_json::to_string(&normalized)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let rows_affected = tx
            .execute(UPDATE_COMPLETED_STEPS_SQL, params![encoded, &now, id as i64])
            .db_context("Failed to update completed steps")?;

        if rows_affected == 0 {
            return Err(TrackerError::ReleaseNotFound { id });
        }

        let release = Self::select_release(&tx, id)?.ok_or(TrackerError::ReleaseNotFound { id })?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(release)
    }

    /// Replaces the notes of a release. Blank notes are stored as NULL.
    pub fn update_additional_info(
        &mut self,
        id: u64,
        additional_info: Option<&str>,
    ) -> Result<Release> {
        let additional_info = rules::normalize_additional_info(additional_info);

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let rows_affected = tx
            .execute(
                UPDATE_ADDITIONAL_INFO_SQL,
                params![additional_info.as_deref(), &now, id as i64],
            )
            .db_context("Failed to update additional info")?;

        if rows_affected == 0 {
            return Err(TrackerError::ReleaseNotFound { id });
        }

        let release = Self::select_release(&tx, id)?.ok_or(TrackerError::ReleaseNotFound { id })?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(release)
    }

    /// Permanently deletes a release.
    ///
    /// Returns whether a row was removed; deleting a missing ID is not an
    /// error.
    pub fn delete_release(&mut self, id: u64) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows_affected = tx
            .execute(DELETE_RELEASE_SQL, params![id as i64])
            .db_context("Failed to delete release")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(rows_affected > 0)
    }
}

/// Decodes the stored step list.
///
/// Rows hold a JSON array; anything else is read as a legacy comma-separated
/// list. Either way the caller still normalizes the result.
fn decode_step_ids(stored: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(stored).unwrap_or_else(|_| {
        stored
            .split(',')
            .map(|id| id.trim().trim_matches(|c| c == '{' || c == '}' || c == '"'))
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect()
    })
}
