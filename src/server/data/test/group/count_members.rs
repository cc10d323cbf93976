use super::*;

/// Tests counting the members of a group.
///
/// Expected: Ok(2) for an owner plus one member
#[tokio::test]
async fn counts_owner_and_members() -> Result<(), DbErr> {
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

    let repo = GroupRepository::new(db);

    assert_eq!(repo.count_members(group.id).await?, 2);

    Ok(())
}
