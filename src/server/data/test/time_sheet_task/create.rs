use super::*;

/// Tests attaching a task to a time-sheet.
///
/// Expected: Ok with the entry not completed and the given duration
#[tokio::test]
async fn attaches_task_as_not_completed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let sheet = factory::create_time_sheet(db, user.id).await?;
    let task = Task::from_entity(factory::create_task(db).await?);

    let repo = TimeSheetTaskRepository::new(db);
    let entry = repo.create(sheet.id, task.clone(), 50).await?;

    assert_eq!(entry.time_sheet_id, sheet.id);
    assert_eq!(entry.task, task);
    assert_eq!(entry.duration, 50);
    assert!(!entry.completed);

    Ok(())
}

/// Tests attaching the same task twice.
///
/// Expected: Err from the composite primary key
#[tokio::test]
async fn rejects_duplicate_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let sheet = factory::create_time_sheet(db, user.id).await?;
    let task = Task::from_entity(factory::create_task(db).await?);

    let repo = TimeSheetTaskRepository::new(db);
    repo.create(sheet.id, task.clone(), 10).await?;

    assert!(repo.create(sheet.id, task, 20).await.is_err());

    Ok(())
}
