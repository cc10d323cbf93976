use super::*;

/// Tests loading the members of a group with their accounts.
///
/// Expected: Ok with one entry per member, each carrying the full user
#[tokio::test]
async fn loads_members_with_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, owner.id).await?;
    factory::create_user_group(db, member.id, group.id).await?;

    let repo = UserGroupRepository::new(db);
    let members = repo.get_by_group_id_with_users(group.id).await?;

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].user.email, owner.email);
    assert_eq!(members[0].role, GroupRole::Owner);
    assert_eq!(members[1].user.pseudo, member.pseudo);
    assert_eq!(members[1].role, GroupRole::Member);

    Ok(())
}
