//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Release tables created before checklist tracking lack the step column
        let has_steps_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('releases') WHERE name = 'completed_step_ids'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect releases table")?;

        if !has_steps_column {
            log::info!("Adding completed_step_ids column to releases table");
            self.connection
                .execute(
                    "ALTER TABLE releases ADD COLUMN completed_step_ids TEXT NOT NULL DEFAULT '[]'",
                    [],
                )
                .db_context("Failed to add completed_step_ids column to releases table")?;
        }

        Ok(())
    }
}
