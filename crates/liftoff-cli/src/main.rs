//! Liftoff CLI Application
//!
//! Command-line interface and MCP server for the release checklist tracker.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use jiff::tz::TimeZone;
use liftoff_core::TrackerBuilder;
use log::info;
use mcp::{run_stdio_server, LiftoffMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

/// Resolves the `--timezone` flag, falling back to the system zone.
fn resolve_time_zone(name: Option<&str>) -> Result<TimeZone> {
    match name {
        Some(name) => {
            TimeZone::get(name).with_context(|| format!("Unknown time zone '{name}'"))
        }
        None => Ok(TimeZone::system()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        timezone,
        command,
    } = Args::parse();

    let time_zone = resolve_time_zone(timezone.as_deref())?;

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize release tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Liftoff started");

    match command {
        Some(Release { command }) => {
            Cli::new(tracker, renderer, time_zone)
                .handle_release_command(command)
                .await
        }
        Some(Steps) => Cli::new(tracker, renderer, time_zone).list_steps(),
        Some(Serve) => {
            info!("Starting Liftoff MCP server");
            run_stdio_server(LiftoffMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(tracker, renderer, time_zone)
                .list_releases()
                .await
        }
    }
}
