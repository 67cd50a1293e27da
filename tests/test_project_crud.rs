//! Integration tests for the SQLite project store.
//!
//! Tests cover:
//! - Adding projects and reading them back
//! - Listing order
//! - Full-record updates and deletes
//! - NotFound and constraint errors
//! - Persistence across reopen

mod common;

use common::*;

#[tokio::test]
async fn test_add_and_fetch_project() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;

    let added = db.add_project(&make_full_project("Build shed", 1050, 0, 3)).await?;
    assert!(added.id > 0, "Project should have positive ID");

    let fetched = db.fetch_project_by_id(added.id).await?;
    assert_eq!(fetched, added);
    assert_eq!(fetched.estimated_hours.map(|h| h.to_string()).as_deref(), Some("10.50"));
    assert_eq!(fetched.actual_hours, Some(Hours::ZERO));
    assert_eq!(fetched.difficulty, Some(3));
    assert_eq!(fetched.notes.as_deref(), Some("notes for Build shed"));

    Ok(())
}

#[tokio::test]
async fn test_optional_fields_stay_empty() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;

    let added = db.add_project(&make_new_project("Sketch only")).await?;
    let fetched = db.fetch_project_by_id(added.id).await?;
    assert_eq!(fetched.name, "Sketch only");
    assert_eq!(fetched.estimated_hours, None);
    assert_eq!(fetched.actual_hours, None);
    assert_eq!(fetched.difficulty, None);
    assert_eq!(fetched.notes, None);

    Ok(())
}

#[tokio::test]
async fn test_list_is_ordered_by_id() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;

    let mut ids = Vec::new();
    for name in ["Zebra fence", "Attic", "Mailbox"] {
        ids.push(db.add_project(&make_new_project(name)).await?.id);
    }

    let projects = db.fetch_all_projects().await?;
    let listed: Vec<(i64, &str)> = projects.iter().map(|p| (p.id, p.name.as_str())).collect();
    assert_eq!(
        listed,
        vec![(ids[0], "Zebra fence"), (ids[1], "Attic"), (ids[2], "Mailbox")]
    );

    Ok(())
}

#[tokio::test]
async fn test_modify_project_details() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;
    let added = db.add_project(&make_full_project("Deck", 2000, 500, 4)).await?;

    let changed = Project {
        name: "Deck and stairs".to_string(),
        actual_hours: Some(Hours::from_hundredths(1225)),
        notes: None,
        ..added.clone()
    };
    db.modify_project_details(&changed).await?;

    let fetched = db.fetch_project_by_id(added.id).await?;
    assert_eq!(fetched, changed);

    Ok(())
}

#[tokio::test]
async fn test_delete_project() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;
    let keep = db.add_project(&make_new_project("Keep")).await?;
    let gone = db.add_project(&make_new_project("Gone")).await?;

    db.delete_project(gone.id).await?;

    let projects = db.fetch_all_projects().await?;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, keep.id);

    let result = db.fetch_project_by_id(gone.id).await;
    assert!(matches!(result, Err(DbError::NotFound { id }) if id == gone.id));

    Ok(())
}

#[tokio::test]
async fn test_missing_rows_are_not_found() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;

    let err = db.fetch_project_by_id(42).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Project with ID=42 does not exist");

    let ghost = Project {
        id: 42,
        name: "Ghost".to_string(),
        estimated_hours: None,
        actual_hours: None,
        difficulty: None,
        notes: None,
    };
    assert!(db.modify_project_details(&ghost).await.unwrap_err().is_not_found());
    assert!(db.delete_project(42).await.unwrap_err().is_not_found());

    Ok(())
}

#[tokio::test]
async fn test_difficulty_out_of_range_is_constraint_violation() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;

    let result = db.add_project(&make_full_project("Too hard", 100, 0, 9)).await;
    assert!(
        matches!(result, Err(DbError::ConstraintViolation(_))),
        "expected constraint violation, got: {:?}",
        result
    );
    assert!(db.fetch_all_projects().await?.is_empty());

    let added = db.add_project(&make_new_project("Fine")).await?;
    let too_easy = Project {
        difficulty: Some(0),
        ..added
    };
    let result = db.modify_project_details(&too_easy).await;
    assert!(matches!(result, Err(DbError::ConstraintViolation(_))));

    Ok(())
}

#[tokio::test]
async fn test_blank_name_is_constraint_violation() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;

    let result = db.add_project(&make_new_project("   ")).await;
    assert!(matches!(result, Err(DbError::ConstraintViolation(_))));

    Ok(())
}

#[tokio::test]
async fn test_projects_persist_after_reopen() -> anyhow::Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let db_path = temp_dir.path().join("persist.db");

    let id = {
        let db = ProjectDb::open(&db_path).await?;
        let added = db.add_project(&make_full_project("Greenhouse", 4000, 125, 5)).await?;
        db.close().await;
        added.id
    };

    {
        let db = ProjectDb::open(&db_path).await?;
        let fetched = db.fetch_project_by_id(id).await?;
        assert_eq!(fetched.name, "Greenhouse");
        assert_eq!(fetched.estimated_hours, Some(Hours::from_hundredths(4000)));
        assert_eq!(fetched.actual_hours, Some(Hours::from_hundredths(125)));
        assert_eq!(fetched.difficulty, Some(5));
        db.close().await;
    }

    Ok(())
}

#[tokio::test]
async fn test_open_fails_when_directory_is_missing() {
    let temp_dir = tempfile::TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("no_such_dir").join("projects.db");

    let result = ProjectDb::open(&db_path).await;
    assert!(result.is_err(), "opening inside a missing directory should fail");
}
