use crate::server::data::time_sheet_share::TimeSheetShareRepository;
use crate::model::time_sheet::AccessLevel;

use super::*;

/// Tests editing one's own time-sheet.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let sheet = factory::create_time_sheet(db, user.id).await?;
    let principal = principal_for(&user);

    let result = AuthGuard::new(db, Some(&principal))
        .require(&[Permission::TimeSheetEdit(sheet.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests editing a time-sheet shared with a group the user owns.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_owner_of_shared_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let manager = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, manager.id).await?;
    factory::create_user_group(db, author.id, group.id).await?;
    let sheet = factory::create_time_sheet(db, author.id).await?;
    TimeSheetShareRepository::new(db)
        .upsert_group_share(sheet.id, group.id, AccessLevel::Read)
        .await?;
    let principal = principal_for(&manager);

    let result = AuthGuard::new(db, Some(&principal))
        .require(&[Permission::TimeSheetEdit(sheet.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests editing a time-sheet shared with a group where the user is only a member.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_member_of_shared_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, author.id).await?;
    factory::create_user_group(db, member.id, group.id).await?;
    let sheet = factory::create_time_sheet(db, author.id).await?;
    TimeSheetShareRepository::new(db)
        .upsert_group_share(sheet.id, group.id, AccessLevel::Write)
        .await?;
    let principal = principal_for(&member);

    let result = AuthGuard::new(db, Some(&principal))
        .require(&[Permission::TimeSheetEdit(sheet.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests editing a time-sheet that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_time_sheet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let principal = principal_for(&user);

    let result = AuthGuard::new(db, Some(&principal))
        .require(&[Permission::TimeSheetEdit(999)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
