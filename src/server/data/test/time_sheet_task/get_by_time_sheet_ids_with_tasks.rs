use super::*;

/// Tests loading entries of several time-sheets with their tasks.
///
/// Expected: Ok with entries of the requested time-sheets only, tasks populated
#[tokio::test]
async fn loads_entries_with_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_time_sheet(db, user.id).await?;
    let second = factory::create_time_sheet(db, user.id).await?;
    let skipped = factory::create_time_sheet(db, user.id).await?;
    let coding = factory::task::TaskFactory::new(db)
        .name("Coding")
        .repetition("DAILY")
        .build()
        .await?;
    let review = factory::task::TaskFactory::new(db).name("Review").build().await?;

    factory::create_time_sheet_task(db, first.id, coding.id, 120).await?;
    factory::create_time_sheet_task(db, second.id, review.id, 60).await?;
    factory::create_time_sheet_task(db, skipped.id, coding.id, 30).await?;

    let repo = TimeSheetTaskRepository::new(db);
    let entries = repo
        .get_by_time_sheet_ids_with_tasks(&[first.id, second.id])
        .await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].time_sheet_id, first.id);
    assert_eq!(entries[0].task.name, "Coding");
    assert_eq!(entries[0].task.repetition.as_deref(), Some("DAILY"));
    assert_eq!(entries[1].task.name, "Review");
    assert_eq!(entries[1].duration, 60);

    Ok(())
}
