//! Integration tests comparing CLI output with the core Display impls
//!
//! The CLI and the MCP server both print the core display types, so what the
//! CLI shows for a release must match the release's own rendering.

use std::process::Command;

use liftoff_core::{params::CreateRelease, ReleaseTracker, TrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a test tracker with temporary database
async fn create_test_tracker() -> (ReleaseTracker, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let tracker = TrackerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create tracker");

    (tracker, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_liftoff"));
    cmd.arg("--no-color").arg("--database-file").arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_show_matches_release_display() {
    let (tracker, temp_dir) = create_test_tracker().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    let release = tracker
        .create_release(&CreateRelease {
            name: "Display parity".to_string(),
            due_date: "2025-06-01T00:00:00.000Z".to_string(),
            additional_info: Some("Shared rendering".to_string()),
            completed_step_ids: vec!["qa_signoff".to_string()],
        })
        .await
        .expect("Failed to create release");

    let cli_output = run_cli_command(db_str, &["release", "show", &release.id.to_string()]);
    assert_eq!(cli_output, release.to_string());
}

#[tokio::test]
async fn test_listing_matches_overview_display() {
    let (tracker, temp_dir) = create_test_tracker().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    for (name, due) in [
        ("early", "2025-01-01T00:00:00.000Z"),
        ("late", "2025-09-01T00:00:00.000Z"),
    ] {
        tracker
            .create_release(&CreateRelease {
                name: name.to_string(),
                due_date: due.to_string(),
                ..Default::default()
            })
            .await
            .expect("Failed to create release");
    }

    let overview = tracker.release_overview().await.unwrap();
    let cli_output = run_cli_command(db_str, &[]);

    assert_eq!(cli_output, format!("# Releases\n\n{overview}"));
    assert!(cli_output.find("late").unwrap() < cli_output.find("early").unwrap());
}
