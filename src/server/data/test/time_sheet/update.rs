use super::*;

/// Tests overwriting the editable fields of a time-sheet.
///
/// Verifies that the owner is preserved.
///
/// Expected: Ok(Some) with the new fields and the original owner
#[tokio::test]
async fn overwrites_fields_and_keeps_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let sheet = TimeSheetFactory::new(db, user.id)
        .title("Before")
        .icon("mdi-clock")
        .build()
        .await?;

    let repo = TimeSheetRepository::new(db);
    let updated = repo
        .update(
            sheet.id,
            TimeSheetParam {
                entry_date: date(6, 1),
                title: Some("After".to_string()),
                icon: None,
                start_date: Some(date(6, 1)),
                end_date: Some(date(6, 7)),
                start_time: Some("09:00".to_string()),
                end_time: Some("17:00".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, sheet.id);
    assert_eq!(updated.user_id, user.id);
    assert_eq!(updated.entry_date, date(6, 1));
    assert_eq!(updated.title.as_deref(), Some("After"));
    assert!(updated.icon.is_none());
    assert_eq!(updated.end_date, Some(date(6, 7)));

    Ok(())
}
