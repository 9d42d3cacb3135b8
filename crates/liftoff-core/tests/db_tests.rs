use jiff::Timestamp;
use liftoff_core::{Database, ReleaseStatus, TrackerError};
use rusqlite::{params, Connection};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn due(raw: &str) -> Timestamp {
    raw.parse().expect("valid timestamp")
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert!(db.list_releases().unwrap().is_empty());
}

#[test]
fn test_create_release() {
    let (_temp_file, mut db) = create_test_db();

    let release = db
        .create_release("v1.0.0", due("2025-06-01T00:00:00Z"), Some("  notes  "), &[])
        .expect("Failed to create release");

    assert!(release.id > 0);
    assert_eq!(release.name, "v1.0.0");
    assert_eq!(release.due_date, due("2025-06-01T00:00:00Z"));
    assert_eq!(release.additional_info.as_deref(), Some("notes"));
    assert!(release.completed_step_ids.is_empty());
    assert_eq!(release.status(), ReleaseStatus::Planned);
    assert_eq!(release.created_at, release.updated_at);
}

#[test]
fn test_create_release_with_initial_steps() {
    let (temp_file, mut db) = create_test_db();

    let steps: Vec<String> = ["rollout_plan", "retired_step", "code_freeze", "rollout_plan"]
        .into_iter()
        .map(String::from)
        .collect();
    let release = db
        .create_release("v1.0.0", due("2025-06-01T00:00:00Z"), None, &steps)
        .unwrap();

    assert_eq!(release.completed_step_ids, vec!["code_freeze", "rollout_plan"]);
    assert_eq!(release.status(), ReleaseStatus::Ongoing);

    let raw = Connection::open(temp_file.path()).unwrap();
    let stored: String = raw
        .query_row(
            "SELECT completed_step_ids FROM releases WHERE id = ?1",
            params![release.id as i64],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, r#"["code_freeze","rollout_plan"]"#);
}

#[test]
fn test_get_release_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .create_release("v1.1.0", due("2025-03-15T12:30:45.250Z"), None, &[])
        .unwrap();
    let fetched = db.get_release(created.id).expect("Failed to get release");

    assert_eq!(fetched, created);
    assert_eq!(fetched.due_date.subsec_millisecond(), 250);
}

#[test]
fn test_get_missing_release() {
    let (_temp_file, db) = create_test_db();

    match db.get_release(99) {
        Err(TrackerError::ReleaseNotFound { id }) => assert_eq!(id, 99),
        other => panic!("Expected ReleaseNotFound error, got {other:?}"),
    }
}

#[test]
fn test_list_releases_order() {
    let (_temp_file, mut db) = create_test_db();

    db.create_release("a", due("2025-01-01T00:00:00.000Z"), None, &[])
        .unwrap();
    db.create_release("b", due("2025-06-01T00:00:00.000Z"), None, &[])
        .unwrap();
    db.create_release("c", due("2025-06-01T00:00:00.000Z"), None, &[])
        .unwrap();

    let ids: Vec<u64> = db.list_releases().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn test_update_completed_steps_normalizes() {
    let (_temp_file, mut db) = create_test_db();
    let release = db
        .create_release("v2", due("2025-06-01T00:00:00Z"), None, &[])
        .unwrap();

    let updated = db
        .update_completed_steps(
            release.id,
            &[
                "rollout_plan".to_string(),
                "bogus".to_string(),
                "code_freeze".to_string(),
                "rollout_plan".to_string(),
            ],
        )
        .unwrap();

    assert_eq!(updated.completed_step_ids, vec!["code_freeze", "rollout_plan"]);
    assert!(updated.updated_at >= release.updated_at);
    assert_eq!(updated.created_at, release.created_at);
}

#[test]
fn test_updates_on_missing_release() {
    let (_temp_file, mut db) = create_test_db();

    assert!(db
        .update_completed_steps(5, &["code_freeze".to_string()])
        .unwrap_err()
        .is_not_found());
    assert!(db
        .update_additional_info(5, Some("hello"))
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_update_additional_info() {
    let (_temp_file, mut db) = create_test_db();
    let release = db
        .create_release("v3", due("2025-06-01T00:00:00Z"), Some("old"), &[])
        .unwrap();

    let updated = db.update_additional_info(release.id, Some(" new ")).unwrap();
    assert_eq!(updated.additional_info.as_deref(), Some("new"));

    let cleared = db.update_additional_info(release.id, Some("   ")).unwrap();
    assert!(cleared.additional_info.is_none());
}

#[test]
fn test_delete_twice() {
    let (_temp_file, mut db) = create_test_db();
    let release = db
        .create_release("v4", due("2025-06-01T00:00:00Z"), None, &[])
        .unwrap();

    assert!(db.delete_release(release.id).unwrap());
    assert!(!db.delete_release(release.id).unwrap());
    assert!(db.list_releases().unwrap().is_empty());
}

#[test]
fn test_ids_are_not_reused() {
    let (_temp_file, mut db) = create_test_db();
    let first = db
        .create_release("v5", due("2025-06-01T00:00:00Z"), None, &[])
        .unwrap();
    db.delete_release(first.id).unwrap();

    let second = db
        .create_release("v6", due("2025-06-01T00:00:00Z"), None, &[])
        .unwrap();
    assert!(second.id > first.id);
}

#[test]
fn test_stale_step_ids_are_filtered_on_read() {
    let (temp_file, mut db) = create_test_db();
    let release = db
        .create_release("v7", due("2025-06-01T00:00:00Z"), None, &[])
        .unwrap();

    let raw = Connection::open(temp_file.path()).unwrap();
    raw.execute(
        "UPDATE releases SET completed_step_ids = ?1 WHERE id = ?2",
        params![
            r#"["monitoring_ready","retired_step","code_freeze","code_freeze"]"#,
            release.id as i64
        ],
    )
    .unwrap();

    let fetched = db.get_release(release.id).unwrap();
    assert_eq!(fetched.completed_step_ids, vec!["code_freeze", "monitoring_ready"]);
    assert_eq!(fetched.status(), ReleaseStatus::Ongoing);
}

#[test]
fn test_legacy_comma_separated_rows_decode() {
    let (temp_file, mut db) = create_test_db();
    let release = db
        .create_release("v8", due("2025-06-01T00:00:00Z"), None, &[])
        .unwrap();

    let raw = Connection::open(temp_file.path()).unwrap();
    raw.execute(
        "UPDATE releases SET completed_step_ids = ?1, additional_info = ?2 WHERE id = ?3",
        params!["qa_signoff, code_freeze", "   ", release.id as i64],
    )
    .unwrap();

    let fetched = db.get_release(release.id).unwrap();
    assert_eq!(fetched.completed_step_ids, vec!["code_freeze", "qa_signoff"]);
    assert!(fetched.additional_info.is_none());
}

#[test]
fn test_schema_initialization_is_repeatable() {
    let temp_file = NamedTempFile::new().unwrap();
    {
        let mut db = Database::new(temp_file.path()).unwrap();
        db.create_release("v9", due("2025-06-01T00:00:00Z"), None, &[])
            .unwrap();
    }

    let db = Database::new(temp_file.path()).unwrap();
    assert_eq!(db.list_releases().unwrap().len(), 1);
}
