use super::*;

/// Tests loading several users at once.
///
/// Expected: Ok with only the requested users, unknown IDs skipped
#[tokio::test]
async fn returns_only_requested_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_by_ids(&[third.id, first.id, 999]).await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}

/// Tests that an empty ID list short-circuits.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.get_by_ids(&[]).await?.is_empty());

    Ok(())
}
