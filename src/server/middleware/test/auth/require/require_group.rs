use super::*;

/// Tests group permissions for the owner.
///
/// Expected: Ok for both owner and member permissions
#[tokio::test]
async fn owner_passes_owner_and_member_checks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, user.id).await?;
    let principal = principal_for(&user);

    let result = AuthGuard::new(db, Some(&principal))
        .require(&[
            Permission::GroupOwner(group.id),
            Permission::GroupMember(group.id),
        ])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests group permissions for a plain member.
///
/// Expected: Ok for the member permission, Err(AuthError::AccessDenied) for owner
#[tokio::test]
async fn member_is_not_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, owner.id).await?;
    factory::create_user_group(db, member.id, group.id).await?;
    let principal = principal_for(&member);
    let guard = AuthGuard::new(db, Some(&principal));

    assert!(guard.require(&[Permission::GroupMember(group.id)]).await.is_ok());
    assert!(matches!(
        guard.require(&[Permission::GroupOwner(group.id)]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests group permissions for a user outside the group.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn outsider_is_not_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, owner.id).await?;
    let principal = principal_for(&outsider);

    let result = AuthGuard::new(db, Some(&principal))
        .require(&[Permission::GroupMember(group.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
