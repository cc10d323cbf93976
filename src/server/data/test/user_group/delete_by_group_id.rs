use super::*;

/// Tests removing every membership of a group.
///
/// Verifies that memberships of other groups are left in place.
///
/// Expected: Ok(2) and no remaining membership for the group
#[tokio::test]
async fn removes_only_memberships_of_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, owner.id).await?;
    let (other_group, _) = factory::create_group_owned_by(db, owner.id).await?;
    factory::create_user_group(db, member.id, group.id).await?;

    let repo = UserGroupRepository::new(db);
    let removed = repo.delete_by_group_id(group.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.get_by_group_id_with_users(group.id).await?.is_empty());
    assert!(repo.find(owner.id, other_group.id).await?.is_some());

    Ok(())
}
