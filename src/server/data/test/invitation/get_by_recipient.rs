use super::*;

/// Tests listing received invitations.
///
/// Expected: Ok with the invitation addressed to the recipient only
#[tokio::test]
async fn lists_invitations_of_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user(db).await?;
    let recipient = factory::create_user(db).await?;
    let bystander = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, sender.id).await?;

    let repo = InvitationRepository::new(db);
    let created = repo
        .create(CreateInvitationParam {
            sender_id: sender.id,
            recipient_id: recipient.id,
            group_id: group.id,
        })
        .await?;

    let received = repo.get_by_recipient(recipient.id).await?;

    assert_eq!(received, vec![created]);
    assert_eq!(received[0].status, InvitationStatus::Pending);
    assert!(repo.get_by_recipient(bystander.id).await?.is_empty());

    Ok(())
}
