use super::*;

/// Tests the email and pseudo existence checks used during registration.
///
/// Expected: true only for values already stored
#[tokio::test]
async fn reports_existing_email_and_pseudo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .pseudo("carol")
        .email("carol@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.exists_by_email("carol@example.com").await?);
    assert!(!repo.exists_by_email("dave@example.com").await?);
    assert!(repo.exists_by_pseudo("carol").await?);
    assert!(!repo.exists_by_pseudo("dave").await?);

    Ok(())
}
