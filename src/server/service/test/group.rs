use super::*;
use crate::{
    model::time_sheet::AccessLevel,
    server::{
        data::{
            invitation::InvitationRepository, time_sheet_share::TimeSheetShareRepository,
            user_group::UserGroupRepository,
        },
        model::{group::GroupRole, invitation::CreateInvitationParam, time_sheet::DateRange},
        service::{
            group::GroupService, time_sheet::TimeSheetService, user_group::UserGroupService,
        },
    },
};

/// Tests creating a group.
///
/// Verifies an 8-character uppercase alphanumeric code is generated and the creator
/// is registered as `OWNER`.
///
/// Expected: Ok with the creator as only member
#[tokio::test]
async fn creates_group_with_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let group = GroupService::new(db)
        .create_group("Team".to_string(), user.id)
        .await?;

    assert_eq!(group.name, "Team");
    assert_eq!(group.invit_code.len(), 8);
    assert!(group
        .invit_code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    assert!(UserGroupService::new(db)
        .is_group_owner(user.id, group.id)
        .await?);

    Ok(())
}

/// Tests joining a group by code.
///
/// Expected: Ok with a `MEMBER` membership, Err(BadRequest) on the second join
#[tokio::test]
async fn joins_group_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let service = GroupService::new(db);
    let group = service.create_group("Team".to_string(), owner.id).await?;

    let membership = service.join_group(&group.invit_code, member.id).await?;
    assert_eq!(membership.role, GroupRole::Member);

    let second = service.join_group(&group.invit_code, member.id).await;
    assert!(matches!(second, Err(AppError::BadRequest(_))));

    let members = service.get_members(group.id).await?;
    assert_eq!(members.len(), 2);

    Ok(())
}

/// Expected: Err(BadRequest) for an unknown invitation code
#[tokio::test]
async fn fails_to_join_with_invalid_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = GroupService::new(db).join_group("NOPE0000", user.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deleting a group with members, shares and invitations.
///
/// Expected: Ok with every dependent row removed and the group no longer found
#[tokio::test]
async fn deletes_group_with_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let invitee = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, owner.id).await?;
    factory::create_user_group(db, member.id, group.id).await?;
    let sheet = factory::create_time_sheet(db, owner.id).await?;
    let share_repo = TimeSheetShareRepository::new(db);
    share_repo
        .upsert_group_share(sheet.id, group.id, AccessLevel::Read)
        .await?;
    InvitationRepository::new(db)
        .create(CreateInvitationParam {
            sender_id: owner.id,
            recipient_id: invitee.id,
            group_id: group.id,
        })
        .await?;

    let service = GroupService::new(db);
    service.delete_group(group.id).await?;

    assert!(matches!(
        service.get_by_id(group.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(UserGroupRepository::new(db)
        .get_by_group_id_with_users(group.id)
        .await?
        .is_empty());
    assert!(share_repo.get_group_shares(sheet.id).await?.is_empty());
    assert!(InvitationRepository::new(db)
        .get_by_group(group.id)
        .await?
        .is_empty());
    // The shared time-sheet itself survives.
    assert_eq!(
        TimeSheetService::new(db)
            .list_for_user(owner.id, DateRange::default())
            .await?
            .len(),
        1
    );

    Ok(())
}

/// Expected: Err(BadRequest) "Group not found" when renaming an unknown group
#[tokio::test]
async fn fails_to_rename_unknown_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupService::new(db)
        .update_group(42, "Renamed".to_string())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Group not found"));

    Ok(())
}

/// Tests leaving a group.
///
/// Expected: Ok for a member, Err(BadRequest) for the last owner
#[tokio::test]
async fn last_owner_cannot_leave() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let (group, _) = factory::create_group_owned_by(db, owner.id).await?;
    factory::create_user_group(db, member.id, group.id).await?;
    let service = GroupService::new(db);

    service.leave_group(group.id, member.id).await?;
    let result = service.leave_group(group.id, owner.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(!UserGroupService::new(db)
        .is_group_member(member.id, group.id)
        .await?);

    Ok(())
}
