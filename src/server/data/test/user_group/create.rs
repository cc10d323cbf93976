use super::*;

/// Tests creating a membership.
///
/// Expected: Ok with the requested role, retrievable through `find`
#[tokio::test]
async fn creates_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;

    let repo = UserGroupRepository::new(db);
    let membership = repo.create(user.id, group.id, GroupRole::Owner).await?;

    assert_eq!(membership.role, GroupRole::Owner);
    assert_eq!(repo.find(user.id, group.id).await?, Some(membership));

    Ok(())
}

/// Tests that the composite primary key rejects a second membership for the same pair.
///
/// Expected: Err on the duplicate insert
#[tokio::test]
async fn rejects_duplicate_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;

    let repo = UserGroupRepository::new(db);
    repo.create(user.id, group.id, GroupRole::Member).await?;
    let result = repo.create(user.id, group.id, GroupRole::Member).await;

    assert!(result.is_err());

    Ok(())
}
