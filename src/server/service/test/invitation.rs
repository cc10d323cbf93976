use super::*;
use crate::server::{
    error::auth::AuthError,
    model::invitation::InvitationStatus,
    service::{invitation::InvitationService, user_group::UserGroupService},
};

/// Tests the full invitation flow.
///
/// Expected: Ok with a pending invitation that becomes accepted and adds the recipient
/// as a member
#[tokio::test]
async fn accepts_invitation_into_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let recipient = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, owner.id).await?;
    let service = InvitationService::new(db);

    let invitation = service.send(owner.id, recipient.id, group.id).await?;
    assert_eq!(invitation.status, InvitationStatus::Pending);
    assert_eq!(service.list_received(recipient.id).await?.len(), 1);

    let accepted = service.accept(invitation.id, recipient.id).await?;

    assert_eq!(accepted.status, InvitationStatus::Accepted);
    assert!(accepted.accepted_at.is_some());
    assert!(UserGroupService::new(db)
        .is_group_member(recipient.id, group.id)
        .await?);

    Ok(())
}

/// Expected: Err(AccessDenied) when a non-member sends an invitation
#[tokio::test]
async fn fails_to_send_from_outside_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let recipient = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, owner.id).await?;

    let result = InvitationService::new(db)
        .send(outsider.id, recipient.id, group.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Expected: Err(BadRequest) when inviting an existing member
#[tokio::test]
async fn fails_to_invite_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, owner.id).await?;
    factory::create_user_group(db, member.id, group.id).await?;

    let result = InvitationService::new(db)
        .send(owner.id, member.id, group.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests answering an invitation.
///
/// Verifies only the recipient may answer and only while the invitation is pending.
///
/// Expected: AccessDenied for another user, Ok on decline, BadRequest on a second answer
#[tokio::test]
async fn only_recipient_answers_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let recipient = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, owner.id).await?;
    let service = InvitationService::new(db);
    let invitation = service.send(owner.id, recipient.id, group.id).await?;

    let by_owner = service.decline(invitation.id, owner.id).await;
    assert!(matches!(
        by_owner,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let declined = service.decline(invitation.id, recipient.id).await?;
    assert_eq!(declined.status, InvitationStatus::Declined);

    let again = service.accept(invitation.id, recipient.id).await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));
    assert!(!UserGroupService::new(db)
        .is_group_member(recipient.id, group.id)
        .await?);

    Ok(())
}
