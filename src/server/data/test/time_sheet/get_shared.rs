use super::*;
use crate::{
    model::time_sheet::AccessLevel, server::data::time_sheet_share::TimeSheetShareRepository,
};

/// Tests listing time-sheets shared with a user.
///
/// Expected: Ok with only the time-sheet shared with that user
#[tokio::test]
async fn lists_time_sheets_shared_with_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let viewer = factory::create_user(db).await?;
    let shared = factory::create_time_sheet(db, owner.id).await?;
    factory::create_time_sheet(db, owner.id).await?;

    TimeSheetShareRepository::new(db)
        .upsert_user_share(shared.id, viewer.id, AccessLevel::Read)
        .await?;

    let repo = TimeSheetRepository::new(db);
    let sheets = repo.get_shared_with_user(viewer.id).await?;

    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].id, shared.id);

    Ok(())
}

/// Tests listing time-sheets shared with a group.
///
/// Expected: Ok with only the time-sheet shared with that group
#[tokio::test]
async fn lists_time_sheets_shared_with_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, owner.id).await?;
    let other_group = factory::create_group(db).await?;
    let shared = factory::create_time_sheet(db, owner.id).await?;
    let elsewhere = factory::create_time_sheet(db, owner.id).await?;

    let shares = TimeSheetShareRepository::new(db);
    shares
        .upsert_group_share(shared.id, group.id, AccessLevel::Write)
        .await?;
    shares
        .upsert_group_share(elsewhere.id, other_group.id, AccessLevel::Read)
        .await?;

    let repo = TimeSheetRepository::new(db);
    let sheets = repo.get_shared_with_group(group.id).await?;

    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].id, shared.id);

    Ok(())
}
