use super::*;

mod require_admin;
mod require_group;
mod require_time_sheet_edit;
mod require_time_sheet_view;

/// Tests a request without a principal.
///
/// Verifies that the guard rejects anonymous requests before checking any
/// permission, even when no permission is requested.
///
/// Expected: Err(AuthError::Unauthenticated)
#[tokio::test]
async fn fails_without_principal() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthGuard::new(db, None).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Unauthenticated))
    ));

    Ok(())
}

/// Tests a principal whose user was deleted after the token was issued.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the token's user ID
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let principal = Principal {
        id: 42,
        username: "ghost@example.com".to_string(),
        role: Role::User,
    };

    let result = AuthGuard::new(db, Some(&principal)).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(42)))
    ));

    Ok(())
}

/// Tests that the guard returns the user from the database.
///
/// Expected: Ok(User) matching the principal's ID
#[tokio::test]
async fn returns_authenticated_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let principal = principal_for(&user);

    let returned = AuthGuard::new(db, Some(&principal)).require(&[]).await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.email, user.email);

    Ok(())
}

/// Tests that if any permission fails, the whole check fails.
///
/// Verifies that the user owning a time-sheet but only being a member of the
/// target group cannot share the time-sheet with that group.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, owner.id).await?;
    factory::create_user_group(db, user.id, group.id).await?;
    let sheet = factory::create_time_sheet(db, user.id).await?;
    let principal = principal_for(&user);

    let result = AuthGuard::new(db, Some(&principal))
        .require(&[
            Permission::TimeSheetEdit(sheet.id),
            Permission::TimeSheetShareWithGroup(sheet.id, group.id),
        ])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests sharing with a group the user owns a time-sheet for and the group itself.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_share_with_owned_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, user.id).await?;
    let sheet = factory::create_time_sheet(db, user.id).await?;
    let principal = principal_for(&user);

    let result = AuthGuard::new(db, Some(&principal))
        .require(&[Permission::TimeSheetShareWithGroup(sheet.id, group.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}
