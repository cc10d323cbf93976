use super::*;

/// Tests listing the groups of a member.
///
/// Verifies that both owned and joined groups are returned and groups the user does
/// not belong to are excluded.
///
/// Expected: Ok with the two groups of the user
#[tokio::test]
async fn returns_groups_of_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (owned, _) = factory::create_group_owned_by(db, user.id).await?;
    let joined = factory::create_group(db).await?;
    factory::create_user_group(db, user.id, joined.id).await?;
    factory::create_group_owned_by(db, other.id).await?;

    let repo = GroupRepository::new(db);
    let groups = repo.get_by_user_id(user.id).await?;

    let ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![owned.id, joined.id]);

    Ok(())
}
