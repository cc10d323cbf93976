use super::*;

/// Tests renaming a group.
///
/// Expected: Ok(Some) with the new name and the unchanged invitation code
#[tokio::test]
async fn renames_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = GroupRepository::new(db);
    let updated = repo
        .update(group.id, "Renamed".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.invit_code, group.invit_code);

    Ok(())
}

/// Tests renaming a group that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);

    assert!(repo.update(7, "Nope".to_string()).await?.is_none());

    Ok(())
}
