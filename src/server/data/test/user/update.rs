use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided fields change and the role is preserved.
///
/// Expected: Ok(Some) with the new pseudo and the original email
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateUserParam {
                pseudo: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.pseudo, "renamed");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.role, Role::Admin);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(42, UpdateUserParam::default()).await?;

    assert!(result.is_none());

    Ok(())
}
