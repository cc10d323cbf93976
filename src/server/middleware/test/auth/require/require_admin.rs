use super::*;

/// Tests the admin permission with an admin user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::create_admin(db).await?;
    let principal = principal_for(&admin);

    let result = AuthGuard::new(db, Some(&principal))
        .require(&[Permission::Admin])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests the admin permission with a regular user.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_regular_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let principal = principal_for(&user);

    let result = AuthGuard::new(db, Some(&principal))
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests acting on another account.
///
/// Verifies a regular user may only act on their own account while an admin may
/// act on any.
///
/// Expected: Ok for self and admin, Err(AuthError::AccessDenied) otherwise
#[tokio::test]
async fn self_or_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let user_principal = principal_for(&user);
    let admin_principal = principal_for(&admin);

    let own = AuthGuard::new(db, Some(&user_principal))
        .require(&[Permission::SelfOrAdmin(user.id)])
        .await;
    let foreign = AuthGuard::new(db, Some(&user_principal))
        .require(&[Permission::SelfOrAdmin(other.id)])
        .await;
    let by_admin = AuthGuard::new(db, Some(&admin_principal))
        .require(&[Permission::SelfOrAdmin(other.id)])
        .await;

    assert!(own.is_ok());
    assert!(matches!(
        foreign,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(by_admin.is_ok());

    Ok(())
}
