use super::*;

/// Tests accepting an invitation.
///
/// Expected: Ok(Some) with status `ACCEPTED` and the acceptance time recorded
#[tokio::test]
async fn records_acceptance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user(db).await?;
    let recipient = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, sender.id).await?;

    let repo = InvitationRepository::new(db);
    let invitation = repo
        .create(CreateInvitationParam {
            sender_id: sender.id,
            recipient_id: recipient.id,
            group_id: group.id,
        })
        .await?;

    let accepted_at = Utc::now();
    let updated = repo
        .update_status(invitation.id, InvitationStatus::Accepted, Some(accepted_at))
        .await?
        .unwrap();

    assert_eq!(updated.status, InvitationStatus::Accepted);
    assert!(updated.accepted_at.is_some());
    assert_eq!(updated.created_at, invitation.created_at);

    Ok(())
}

/// Tests updating an invitation that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_invitation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InvitationRepository::new(db);
    let result = repo
        .update_status(3, InvitationStatus::Declined, None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
