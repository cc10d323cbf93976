use super::*;

/// Tests sharing the same time-sheet with the same user twice.
///
/// Expected: a single share row carrying the latest access level
#[tokio::test]
async fn second_user_share_updates_access_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let viewer = factory::create_user(db).await?;
    let sheet = factory::create_time_sheet(db, owner.id).await?;

    let repo = TimeSheetShareRepository::new(db);
    repo.upsert_user_share(sheet.id, viewer.id, AccessLevel::Read)
        .await?;
    let share = repo
        .upsert_user_share(sheet.id, viewer.id, AccessLevel::Write)
        .await?;

    assert_eq!(share.access_level, AccessLevel::Write);
    let shares = repo.get_user_shares(sheet.id).await?;
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].target_id, viewer.id);
    assert_eq!(shares[0].access_level, AccessLevel::Write);

    Ok(())
}

/// Tests the same upsert behaviour for group shares.
///
/// Expected: a single group share carrying the latest access level
#[tokio::test]
async fn second_group_share_updates_access_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, owner.id).await?;
    let sheet = factory::create_time_sheet(db, owner.id).await?;

    let repo = TimeSheetShareRepository::new(db);
    repo.upsert_group_share(sheet.id, group.id, AccessLevel::Write)
        .await?;
    repo.upsert_group_share(sheet.id, group.id, AccessLevel::Read)
        .await?;

    let shares = repo.get_group_shares(sheet.id).await?;
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].access_level, AccessLevel::Read);

    Ok(())
}
