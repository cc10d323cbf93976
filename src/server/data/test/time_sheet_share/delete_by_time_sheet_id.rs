use super::*;

/// Tests removing every share of a time-sheet.
///
/// Expected: Ok(2) for one user share plus one group share, none left afterwards
#[tokio::test]
async fn removes_user_and_group_shares() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let viewer = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, owner.id).await?;
    let sheet = factory::create_time_sheet(db, owner.id).await?;

    let repo = TimeSheetShareRepository::new(db);
    repo.upsert_user_share(sheet.id, viewer.id, AccessLevel::Read)
        .await?;
    repo.upsert_group_share(sheet.id, group.id, AccessLevel::Read)
        .await?;

    assert_eq!(repo.delete_by_time_sheet_id(sheet.id).await?, 2);
    assert!(repo.get_user_shares(sheet.id).await?.is_empty());
    assert!(repo.get_group_shares(sheet.id).await?.is_empty());

    Ok(())
}
