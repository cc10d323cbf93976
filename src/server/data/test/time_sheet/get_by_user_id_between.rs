use super::*;

/// Tests filtering time-sheets with both bounds.
///
/// Verifies that time-sheets dated exactly on the bounds are included and that other
/// users' time-sheets never appear.
///
/// Expected: Ok with the three time-sheets dated inside [Mar 5, Mar 10]
#[tokio::test]
async fn includes_both_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    for day in [4, 5, 7, 10, 11] {
        TimeSheetFactory::new(db, user.id)
            .entry_date(date(3, day))
            .build()
            .await?;
    }
    TimeSheetFactory::new(db, other.id)
        .entry_date(date(3, 7))
        .build()
        .await?;

    let repo = TimeSheetRepository::new(db);
    let sheets = repo
        .get_by_user_id_between(user.id, DateRange::new(Some(date(3, 5)), Some(date(3, 10))))
        .await?;

    let dates: Vec<NaiveDate> = sheets.iter().map(|s| s.entry_date).collect();
    assert_eq!(dates, vec![date(3, 5), date(3, 7), date(3, 10)]);
    assert!(sheets.iter().all(|s| s.user_id == user.id));

    Ok(())
}

/// Tests filtering with only a start bound.
///
/// Expected: Ok with every time-sheet on or after the start date
#[tokio::test]
async fn applies_single_start_bound() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for day in [1, 15, 28] {
        TimeSheetFactory::new(db, user.id)
            .entry_date(date(2, day))
            .build()
            .await?;
    }

    let repo = TimeSheetRepository::new(db);
    let sheets = repo
        .get_by_user_id_between(user.id, DateRange::new(Some(date(2, 15)), None))
        .await?;

    assert_eq!(sheets.len(), 2);

    Ok(())
}
