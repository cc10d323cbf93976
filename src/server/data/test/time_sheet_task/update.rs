use super::*;

/// Tests updating the duration of an entry.
///
/// Verifies that the composite identity is unchanged and completion is kept.
///
/// Expected: Ok(Some) with duration 75
#[tokio::test]
async fn updates_duration_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let sheet = factory::create_time_sheet(db, user.id).await?;
    let task = factory::create_task(db).await?;
    factory::time_sheet_task::TimeSheetTaskFactory::new(db, sheet.id, task.id)
        .duration(50)
        .completed(true)
        .build()
        .await?;

    let repo = TimeSheetTaskRepository::new(db);
    let entry = repo
        .update(
            sheet.id,
            task.id,
            UpdateEntryParam {
                duration: Some(75),
                completed: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(entry.time_sheet_id, sheet.id);
    assert_eq!(entry.task.id, task.id);
    assert_eq!(entry.duration, 75);
    assert!(entry.completed);

    Ok(())
}

/// Tests updating an entry that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let sheet = factory::create_time_sheet(db, user.id).await?;

    let repo = TimeSheetTaskRepository::new(db);
    let result = repo
        .update(sheet.id, 99, UpdateEntryParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
