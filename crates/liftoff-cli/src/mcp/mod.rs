//! MCP server implementation for Liftoff
//!
//! Exposes the release tracker to AI assistants over the Model Context
//! Protocol on stdio. Calls are serialized through a mutex around the
//! tracker.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use liftoff_core::ReleaseTracker;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{CreateRelease, Id, McpResult, SetReleaseStep, UpdateReleaseInfo};

const INSTRUCTIONS: &str = r#"Liftoff tracks software releases against a fixed pre-launch checklist.

## Core Concepts
- **Release**: a name, a due date (ISO-8601 instant), optional notes and the set of completed checklist steps
- **Checklist**: eight fixed steps, listed by `list_steps`; refer to them by their identifier (e.g. `code_freeze`)
- **Status**: derived, never set directly. `planned` with no steps done, `done` with every step done, `ongoing` otherwise

## Workflow
1. Call `list_steps` once to learn the step identifiers
2. Create a release with `create_release`; optionally pass `completed_step_ids` for steps already done
3. Tick or untick steps with `set_release_step` (checked=true/false)
4. Keep context in the notes with `update_release_info`
5. Review progress with `list_releases` (latest due date first) or `show_release`

## Tool Categories
- **Catalog**: list_steps
- **Releases**: list_releases, show_release, create_release, update_release_info, delete_release
- **Checklist**: set_release_step"#;

/// MCP server for Liftoff
#[derive(Clone)]
pub struct LiftoffMcpServer {
    tracker: Arc<Mutex<ReleaseTracker>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LiftoffMcpServer {
    /// Create a new Liftoff MCP server
    pub fn new(tracker: ReleaseTracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.tracker.clone())
    }

    #[tool(
        name = "list_steps",
        description = "List the fixed release checklist in order, with each step's identifier and label. Use the identifiers with set_release_step and create_release."
    )]
    async fn list_steps(&self) -> McpResult {
        self.handlers().list_steps().await
    }

    #[tool(
        name = "list_releases",
        description = "List all releases, latest due date first (ties: newest ID first). Each entry shows the ID, name, derived status, checklist progress, due date and notes."
    )]
    async fn list_releases(&self) -> McpResult {
        self.handlers().list_releases().await
    }

    #[tool(
        name = "show_release",
        description = "Show one release by ID with its status, due date, notes and the full checklist marking each step as done or pending."
    )]
    async fn show_release(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_release(params).await
    }

    #[tool(
        name = "create_release",
        description = "Create a release. Requires a non-blank name and a due_date as an ISO-8601 instant (e.g. 2025-06-01T00:00:00.000Z). Optional additional_info holds notes; optional completed_step_ids ticks steps right away. Returns the new release ID."
    )]
    async fn create_release(&self, params: Parameters<CreateRelease>) -> McpResult {
        self.handlers().create_release(params).await
    }

    #[tool(
        name = "set_release_step",
        description = "Mark one checklist step of a release as done (checked=true) or pending (checked=false). The step_id must come from list_steps. The release status is recomputed from the result."
    )]
    async fn set_release_step(&self, params: Parameters<SetReleaseStep>) -> McpResult {
        self.handlers().set_release_step(params).await
    }

    #[tool(
        name = "update_release_info",
        description = "Replace the notes of a release. Omit additional_info or pass blank text to clear the notes."
    )]
    async fn update_release_info(&self, params: Parameters<UpdateReleaseInfo>) -> McpResult {
        self.handlers().update_release_info(params).await
    }

    #[tool(
        name = "delete_release",
        description = "Permanently delete a release by ID. This cannot be undone. Fails if no release with that ID exists."
    )]
    async fn delete_release(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_release(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for LiftoffMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "liftoff".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: LiftoffMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Liftoff MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
