//! Command-line interface definitions and handlers
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → ReleaseTracker
//! ```
//!
//! [`Cli`] runs a parsed command against the tracker and prints the
//! markdown result through the [`TerminalRenderer`].

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use jiff::tz::TimeZone;
use liftoff_core::{
    calendar, catalog,
    display::{CreateResult, DeleteResult, StepCatalog, UpdateResult},
    params::*,
    rules, ReleaseTracker,
};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Parses a release ID argument, rejecting anything below 1.
fn parse_id(raw: &str) -> std::result::Result<u64, String> {
    rules::parse_release_id(raw).map_err(|e| e.to_string())
}

/// Create a new release
///
/// The due date may be a calendar day (`2025-06-01`), read as midnight in the
/// configured time zone, or a full ISO-8601 instant. It defaults to tomorrow.
#[derive(Args)]
pub struct CreateReleaseArgs {
    /// Name of the release, e.g. v1.2.0
    pub name: String,
    /// Due date as YYYY-MM-DD or an ISO-8601 date-time
    #[arg(long)]
    pub due: Option<String>,
    /// Optional notes about the release
    #[arg(short, long)]
    pub info: Option<String>,
    /// Checklist step to mark done right away; repeat for several
    #[arg(short, long = "step")]
    pub steps: Vec<String>,
}

impl CreateReleaseArgs {
    /// Convert CLI arguments to core parameters, resolving the due date in
    /// `tz`.
    pub fn into_params(self, tz: &TimeZone) -> Result<CreateRelease> {
        let due_date = match self.due {
            Some(raw) => calendar::resolve_due_input(&raw, tz)?,
            None => {
                let day = calendar::default_due_day(tz)?;
                liftoff_core::IsoTimestamp(&calendar::due_date_for_day(day, tz)?).to_string()
            }
        };

        Ok(CreateRelease {
            name: self.name,
            due_date,
            additional_info: self.info,
            completed_step_ids: self.steps,
        })
    }
}

/// Show details of a specific release
#[derive(Args)]
pub struct ShowReleaseArgs {
    #[arg(value_parser = parse_id, help = "Unique identifier of the release to show")]
    pub id: u64,
}

impl From<ShowReleaseArgs> for Id {
    fn from(val: ShowReleaseArgs) -> Self {
        Id { id: val.id }
    }
}

/// Tick or untick a checklist step
#[derive(Args)]
pub struct StepToggleArgs {
    #[arg(value_parser = parse_id, help = "Unique identifier of the release")]
    pub id: u64,
    #[arg(help = "Checklist step identifier, see `liftoff steps`")]
    pub step: String,
}

impl StepToggleArgs {
    pub fn into_params(self, checked: bool) -> SetReleaseStep {
        SetReleaseStep {
            release_id: self.id,
            step_id: self.step,
            checked,
        }
    }
}

/// Replace the notes of a release
#[derive(Args)]
pub struct NotesArgs {
    #[arg(value_parser = parse_id, help = "Unique identifier of the release")]
    pub id: u64,
    #[arg(help = "New notes; omit to clear them")]
    pub text: Option<String>,
}

impl From<NotesArgs> for UpdateReleaseInfo {
    fn from(val: NotesArgs) -> Self {
        UpdateReleaseInfo {
            release_id: val.id,
            additional_info: val.text,
        }
    }
}

/// Permanently delete a release
#[derive(Args)]
pub struct DeleteReleaseArgs {
    #[arg(value_parser = parse_id, help = "Unique identifier of the release to delete")]
    pub id: u64,
}

impl From<DeleteReleaseArgs> for Id {
    fn from(val: DeleteReleaseArgs) -> Self {
        Id { id: val.id }
    }
}

/// Release management subcommands
#[derive(Subcommand)]
pub enum ReleaseCommands {
    /// List releases, latest due date first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a release with its checklist
    #[command(alias = "s")]
    Show(ShowReleaseArgs),
    /// Create a new release
    #[command(alias = "c")]
    Create(CreateReleaseArgs),
    /// Mark a checklist step as done
    Check(StepToggleArgs),
    /// Mark a checklist step as pending
    Uncheck(StepToggleArgs),
    /// Replace or clear the notes of a release
    #[command(alias = "n")]
    Notes(NotesArgs),
    /// Permanently delete a release
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteReleaseArgs),
}

/// Runs CLI commands against a tracker.
pub struct Cli {
    tracker: ReleaseTracker,
    renderer: TerminalRenderer,
    time_zone: TimeZone,
}

impl Cli {
    pub fn new(tracker: ReleaseTracker, renderer: TerminalRenderer, time_zone: TimeZone) -> Self {
        Self {
            tracker,
            renderer,
            time_zone,
        }
    }

    pub async fn handle_release_command(&self, command: ReleaseCommands) -> Result<()> {
        match command {
            ReleaseCommands::List => self.list_releases().await,
            ReleaseCommands::Show(args) => self.show_release(&args.into()).await,
            ReleaseCommands::Create(args) => {
                let params = args.into_params(&self.time_zone)?;
                self.create_release(&params).await
            }
            ReleaseCommands::Check(args) => self.set_release_step(&args.into_params(true)).await,
            ReleaseCommands::Uncheck(args) => {
                self.set_release_step(&args.into_params(false)).await
            }
            ReleaseCommands::Notes(args) => self.update_release_info(&args.into()).await,
            ReleaseCommands::Delete(args) => self.delete_release(&args.into()).await,
        }
    }

    pub fn list_steps(&self) -> Result<()> {
        let output = format!(
            "# Release checklist\n\n{}",
            StepCatalog(self.tracker.list_steps())
        );
        self.renderer.render(&output)
    }

    pub async fn list_releases(&self) -> Result<()> {
        let overview = self
            .tracker
            .release_overview()
            .await
            .context("Failed to list releases")?;

        debug!("Listing {} releases", overview.len());
        self.renderer.render(&format!("# Releases\n\n{overview}"))
    }

    async fn show_release(&self, params: &Id) -> Result<()> {
        let release = self
            .tracker
            .get_release(params)
            .await
            .context("Failed to show release")?;

        self.renderer.render(&release.to_string())
    }

    async fn create_release(&self, params: &CreateRelease) -> Result<()> {
        let release = self
            .tracker
            .create_release(params)
            .await
            .context("Failed to create release")?;

        self.renderer
            .render(&CreateResult::new(release).to_string())
    }

    async fn set_release_step(&self, params: &SetReleaseStep) -> Result<()> {
        let release = self
            .tracker
            .set_release_step(params)
            .await
            .context("Failed to update checklist")?;

        let label = catalog::find_step(&params.step_id).map_or(params.step_id.as_str(), |s| s.label);
        let state = if params.checked { "done" } else { "pending" };
        let change = format!("Marked '{label}' as {state}");

        self.renderer
            .render(&UpdateResult::with_changes(release, vec![change]).to_string())
    }

    async fn update_release_info(&self, params: &UpdateReleaseInfo) -> Result<()> {
        let release = self
            .tracker
            .update_release_info(params)
            .await
            .context("Failed to update notes")?;

        let change = if release.additional_info.is_some() {
            "Updated notes"
        } else {
            "Cleared notes"
        };

        self.renderer
            .render(&UpdateResult::with_changes(release, vec![change.to_string()]).to_string())
    }

    async fn delete_release(&self, params: &Id) -> Result<()> {
        let release = self
            .tracker
            .get_release(params)
            .await
            .context("Failed to delete release")?;

        self.tracker
            .delete_release(params)
            .await
            .context("Failed to delete release")?;

        self.renderer
            .render(&DeleteResult::new(release).to_string())
    }
}
