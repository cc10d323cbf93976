use super::*;

/// Tests looking up a group by its invitation code.
///
/// Expected: Ok(Some) for the exact code, Ok(None) for an unknown code
#[tokio::test]
async fn finds_group_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParam {
            name: "Team".to_string(),
            invit_code: "ABCD1234".to_string(),
        })
        .await?;

    let found = repo.find_by_invit_code("ABCD1234").await?;
    let missing = repo.find_by_invit_code("ZZZZ9999").await?;

    assert_eq!(found, Some(group));
    assert!(missing.is_none());

    Ok(())
}
