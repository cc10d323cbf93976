use crate::model::time_sheet::AccessLevel;
use crate::server::data::time_sheet_share::TimeSheetShareRepository;

use super::*;

/// Tests viewing a time-sheet shared directly with the user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_direct_share() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;
    let sheet = factory::create_time_sheet(db, author.id).await?;
    TimeSheetShareRepository::new(db)
        .upsert_user_share(sheet.id, reader.id, AccessLevel::Read)
        .await?;
    let principal = principal_for(&reader);

    let result = AuthGuard::new(db, Some(&principal))
        .require(&[Permission::TimeSheetView(sheet.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests viewing a time-sheet shared with a group the user belongs to.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_group_share() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, author.id).await?;
    factory::create_user_group(db, member.id, group.id).await?;
    let sheet = factory::create_time_sheet(db, author.id).await?;
    TimeSheetShareRepository::new(db)
        .upsert_group_share(sheet.id, group.id, AccessLevel::Read)
        .await?;
    let principal = principal_for(&member);

    let result = AuthGuard::new(db, Some(&principal))
        .require(&[Permission::TimeSheetView(sheet.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests viewing a time-sheet that is not shared with the user.
///
/// Verifies that a regular user is denied while an admin may view it.
///
/// Expected: Err(AuthError::AccessDenied) for the user, Ok for the admin
#[tokio::test]
async fn denies_unshared_time_sheet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let sheet = factory::create_time_sheet(db, author.id).await?;
    let stranger_principal = principal_for(&stranger);
    let admin_principal = principal_for(&admin);

    let denied = AuthGuard::new(db, Some(&stranger_principal))
        .require(&[Permission::TimeSheetView(sheet.id)])
        .await;
    let allowed = AuthGuard::new(db, Some(&admin_principal))
        .require(&[Permission::TimeSheetView(sheet.id)])
        .await;

    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(allowed.is_ok());

    Ok(())
}
