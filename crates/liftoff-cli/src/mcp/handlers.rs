//! MCP tool handlers implementation

use std::sync::Arc;

use liftoff_core::{
    catalog,
    display::{CreateResult, OperationStatus, StepCatalog, UpdateResult},
    params as core, ReleaseTracker,
};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Deserializes transparently into the wrapped core type and forwards its
/// JSON schema, so the core params need no MCP-specific types.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type CreateRelease = McpParams<core::CreateRelease>;
pub type SetReleaseStep = McpParams<core::SetReleaseStep>;
pub type UpdateReleaseInfo = McpParams<core::UpdateReleaseInfo>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    tracker: Arc<Mutex<ReleaseTracker>>,
}

impl McpHandlers {
    pub fn new(tracker: Arc<Mutex<ReleaseTracker>>) -> Self {
        Self { tracker }
    }

    pub async fn list_steps(&self) -> McpResult {
        debug!("list_steps");

        let tracker = self.tracker.lock().await;
        text_result(format!(
            "# Release checklist\n\n{}",
            StepCatalog(tracker.list_steps())
        ))
    }

    pub async fn list_releases(&self) -> McpResult {
        debug!("list_releases");

        let overview = self
            .tracker
            .lock()
            .await
            .release_overview()
            .await
            .map_err(|e| to_mcp_error("Failed to list releases", &e))?;

        let title = if overview.is_empty() {
            "No releases found"
        } else {
            "Releases"
        };

        text_result(format!("# {title}\n\n{overview}"))
    }

    pub async fn show_release(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_release: {params:?}");

        let release = self
            .tracker
            .lock()
            .await
            .get_release(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get release", &e))?;

        text_result(release.to_string())
    }

    pub async fn create_release(&self, Parameters(params): Parameters<CreateRelease>) -> McpResult {
        debug!("create_release: {params:?}");

        let release = self
            .tracker
            .lock()
            .await
            .create_release(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create release", &e))?;

        text_result(CreateResult::new(release).to_string())
    }

    pub async fn set_release_step(
        &self,
        Parameters(params): Parameters<SetReleaseStep>,
    ) -> McpResult {
        debug!("set_release_step: {params:?}");

        let inner = params.as_ref();
        let release = self
            .tracker
            .lock()
            .await
            .set_release_step(inner)
            .await
            .map_err(|e| to_mcp_error("Failed to update checklist", &e))?;

        let label = catalog::find_step(&inner.step_id).map_or(inner.step_id.as_str(), |s| s.label);
        let state = if inner.checked { "done" } else { "pending" };
        let changes = vec![format!("Marked '{label}' as {state}")];

        text_result(UpdateResult::with_changes(release, changes).to_string())
    }

    pub async fn update_release_info(
        &self,
        Parameters(params): Parameters<UpdateReleaseInfo>,
    ) -> McpResult {
        debug!("update_release_info: {params:?}");

        let release = self
            .tracker
            .lock()
            .await
            .update_release_info(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update notes", &e))?;

        let change = if release.additional_info.is_some() {
            "Updated notes"
        } else {
            "Cleared notes"
        };

        text_result(UpdateResult::with_changes(release, vec![change.to_string()]).to_string())
    }

    pub async fn delete_release(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_release: {params:?}");

        let id = params.as_ref().id;
        self.tracker
            .lock()
            .await
            .delete_release(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete release", &e))?;

        text_result(OperationStatus::success(format!("Deleted release with ID {id}.")).to_string())
    }
}
