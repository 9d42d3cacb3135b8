//! Tests for the tracker module.

use tempfile::TempDir;

use super::*;
use crate::{
    catalog::RELEASE_STEPS,
    error::TrackerError,
    models::ReleaseStatus,
    params::{CreateRelease, Id, SetReleaseStep, UpdateReleaseInfo},
};

/// Helper function to create a test tracker
async fn create_test_tracker() -> (TempDir, ReleaseTracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

fn create_params(name: &str, due_date: &str) -> CreateRelease {
    CreateRelease {
        name: name.to_string(),
        due_date: due_date.to_string(),
        additional_info: None,
        completed_step_ids: vec![],
    }
}

fn toggle(release_id: u64, step_id: &str, checked: bool) -> SetReleaseStep {
    SetReleaseStep {
        release_id,
        step_id: step_id.to_string(),
        checked,
    }
}

#[tokio::test]
async fn test_create_release_starts_planned() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let release = tracker
        .create_release(&CreateRelease {
            name: "  v1.2.0  ".to_string(),
            due_date: "2025-06-01T00:00:00.000Z".to_string(),
            additional_info: Some("   ".to_string()),
            completed_step_ids: vec![],
        })
        .await
        .expect("Failed to create release");

    assert_eq!(release.name, "v1.2.0");
    assert!(release.completed_step_ids.is_empty());
    assert!(release.additional_info.is_none());
    assert_eq!(release.status(), ReleaseStatus::Planned);

    let fetched = tracker
        .get_release(&Id { id: release.id })
        .await
        .expect("Failed to get release");
    assert_eq!(fetched, release);
}

#[tokio::test]
async fn test_create_release_validation_order() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    // Both fields are invalid; the name is reported.
    match tracker.create_release(&create_params(" ", "nope")).await {
        Err(TrackerError::InvalidInput { field, .. }) => assert_eq!(field, "name"),
        other => panic!("Expected name validation error, got {other:?}"),
    }

    match tracker.create_release(&create_params("v1", "nope")).await {
        Err(TrackerError::InvalidInput { field, reason }) => {
            assert_eq!(field, "due_date");
            assert_eq!(reason, "invalid due date");
        }
        other => panic!("Expected due date validation error, got {other:?}"),
    }

    assert!(tracker.list_releases().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_release_with_initial_steps() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let release = tracker
        .create_release(&CreateRelease {
            completed_step_ids: vec!["rollout_plan".to_string(), "code_freeze".to_string()],
            ..create_params("v2", "2025-07-01T00:00:00Z")
        })
        .await
        .expect("Failed to create release");

    assert_eq!(release.completed_step_ids, vec!["code_freeze", "rollout_plan"]);
    assert_eq!(release.status(), ReleaseStatus::Ongoing);
}

#[tokio::test]
async fn test_create_release_rejects_unknown_initial_step() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker
        .create_release(&CreateRelease {
            completed_step_ids: vec!["code_freeze".to_string(), "launch_party".to_string()],
            ..create_params("v2", "2025-07-01T00:00:00Z")
        })
        .await;

    assert!(matches!(result, Err(TrackerError::UnknownStep { .. })));
    assert!(tracker.list_releases().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ticking_every_step_marks_done() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let release = tracker
        .create_release(&create_params("v3", "2025-08-01"))
        .await
        .unwrap();

    let mut current = release;
    for step in RELEASE_STEPS.iter().rev() {
        current = tracker
            .set_release_step(&toggle(current.id, step.id, true))
            .await
            .expect("Failed to tick step");
    }
    assert_eq!(current.status(), ReleaseStatus::Done);
    assert_eq!(current.progress(), (RELEASE_STEPS.len(), RELEASE_STEPS.len()));

    let current = tracker
        .set_release_step(&toggle(current.id, "qa_signoff", false))
        .await
        .unwrap();
    assert_eq!(current.status(), ReleaseStatus::Ongoing);
    assert!(!current.is_step_completed("qa_signoff"));
}

#[tokio::test]
async fn test_unknown_step_leaves_release_unchanged() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let release = tracker
        .create_release(&create_params("v4", "2025-08-01"))
        .await
        .unwrap();
    let release = tracker
        .set_release_step(&toggle(release.id, "code_freeze", true))
        .await
        .unwrap();

    match tracker
        .set_release_step(&toggle(release.id, "launch_party", true))
        .await
    {
        Err(TrackerError::UnknownStep { step_id }) => assert_eq!(step_id, "launch_party"),
        other => panic!("Expected UnknownStep error, got {other:?}"),
    }

    let fetched = tracker.get_release(&Id { id: release.id }).await.unwrap();
    assert_eq!(fetched, release);
}

#[tokio::test]
async fn test_toggle_on_missing_release() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    match tracker.set_release_step(&toggle(999, "code_freeze", true)).await {
        Err(TrackerError::ReleaseNotFound { id }) => assert_eq!(id, 999),
        other => panic!("Expected ReleaseNotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_release_info() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let release = tracker
        .create_release(&create_params("v5", "2025-09-01"))
        .await
        .unwrap();

    let updated = tracker
        .update_release_info(&UpdateReleaseInfo {
            release_id: release.id,
            additional_info: Some("  ship after the freeze  ".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(updated.additional_info.as_deref(), Some("ship after the freeze"));

    let cleared = tracker
        .update_release_info(&UpdateReleaseInfo {
            release_id: release.id,
            additional_info: Some("\n".to_string()),
        })
        .await
        .unwrap();
    assert!(cleared.additional_info.is_none());

    let missing = tracker
        .update_release_info(&UpdateReleaseInfo {
            release_id: 42,
            additional_info: None,
        })
        .await;
    assert!(matches!(missing, Err(TrackerError::ReleaseNotFound { id: 42 })));
}

#[tokio::test]
async fn test_delete_release() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let release = tracker
        .create_release(&create_params("v6", "2025-10-01"))
        .await
        .unwrap();

    tracker
        .delete_release(&Id { id: release.id })
        .await
        .expect("Failed to delete release");

    match tracker.delete_release(&Id { id: release.id }).await {
        Err(TrackerError::DeletionFailed { id }) => assert_eq!(id, release.id),
        other => panic!("Expected DeletionFailed error, got {other:?}"),
    }

    assert!(!tracker
        .delete_release_by_id(&Id { id: release.id })
        .await
        .unwrap());
    assert!(tracker
        .get_release(&Id { id: release.id })
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_release_overview_order_and_rendering() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    for (name, due) in [
        ("first", "2025-01-01T00:00:00.000Z"),
        ("second", "2025-06-01T00:00:00.000Z"),
        ("third", "2025-06-01T00:00:00.000Z"),
    ] {
        tracker.create_release(&create_params(name, due)).await.unwrap();
    }

    let overview = tracker.release_overview().await.unwrap();
    let ids: Vec<u64> = overview.iter().map(|release| release.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);

    let rendered = overview.to_string();
    assert!(rendered.contains("## third (ID: 3)"));
    assert!(rendered.find("third").unwrap() < rendered.find("first").unwrap());
}

#[tokio::test]
async fn test_list_steps_matches_catalog() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let steps = tracker.list_steps();
    assert_eq!(steps.len(), 8);
    assert_eq!(steps[0].id, "code_freeze");
    assert_eq!(steps[7].id, "post_release_owner");
}

#[tokio::test]
async fn test_builder_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("dir").join("liftoff.db");

    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");

    assert!(db_path.exists());
    assert_eq!(tracker.database_path(), db_path.as_path());
}
