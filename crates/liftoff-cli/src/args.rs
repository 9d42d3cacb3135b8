use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::ReleaseCommands;

/// Release checklist tracker
///
/// Liftoff keeps a list of upcoming releases, each measured against the same
/// fixed checklist (code freeze, QA sign-off, security review and so on). A
/// release is planned until its first step is ticked and done once every
/// step is. Run without a command to list releases, or use `serve` to expose
/// the tracker to AI assistants over MCP (Model Context Protocol).
#[derive(Parser)]
#[command(version, about, name = "liftoff")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/liftoff/liftoff.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// IANA time zone used to interpret dates given without a time, e.g.
    /// Europe/Berlin. Defaults to the system time zone
    #[arg(long, global = true)]
    pub timezone: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Liftoff CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage releases
    #[command(alias = "r")]
    Release {
        #[command(subcommand)]
        command: ReleaseCommands,
    },
    /// Show the release checklist
    Steps,
    /// Start the MCP server
    Serve,
}
