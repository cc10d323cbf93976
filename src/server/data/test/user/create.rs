use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores every provided field and assigns an ID.
///
/// Expected: Ok with user created with the `USER` role
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            pseudo: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::User,
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.pseudo, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.password, "hash");
    assert_eq!(user.role, Role::User);

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Expected: Err for the second insert with the same email
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        pseudo: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password_hash: "hash".to_string(),
        role: Role::User,
    };
    repo.create(param.clone()).await?;

    let result = repo
        .create(CreateUserParam {
            pseudo: "other".to_string(),
            ..param
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
