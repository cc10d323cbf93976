//! Invitation service for business logic.
//!
//! Invitations let a group member invite a specific user instead of handing out the
//! group's code. Only the recipient can answer an invitation and only once.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        group::GroupRepository, invitation::InvitationRepository, user::UserRepository,
        user_group::UserGroupRepository,
    },
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        group::GroupRole,
        invitation::{CreateInvitationParam, Invitation, InvitationStatus},
    },
};

/// Service providing business logic for group invitations.
pub struct InvitationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvitationService<'a> {
    /// Creates a new InvitationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `InvitationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Invites a user into a group.
    ///
    /// # Arguments
    /// - `sender_id` - Member of the group sending the invitation
    /// - `recipient_id` - User being invited
    /// - `group_id` - Group the recipient is invited into
    ///
    /// # Returns
    /// - `Ok(Invitation)` - The pending invitation
    /// - `Err(AppError::NotFound)` - No group with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - Sender is not a member of the group
    /// - `Err(AppError::BadRequest)` - Recipient does not exist or is already a member
    pub async fn send(
        &self,
        sender_id: i32,
        recipient_id: i32,
        group_id: i32,
    ) -> Result<Invitation, AppError> {
        if GroupRepository::new(self.db)
            .find_by_id(group_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        let membership_repo = UserGroupRepository::new(self.db);
        if membership_repo.find(sender_id, group_id).await?.is_none() {
            return Err(AuthError::AccessDenied(
                sender_id,
                format!("User is not a member of group {}", group_id),
            )
            .into());
        }

        if UserRepository::new(self.db)
            .find_by_id(recipient_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("Recipient not found".to_string()));
        }
        if membership_repo.find(recipient_id, group_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "Recipient is already a member of this group".to_string(),
            ));
        }

        let invitation = InvitationRepository::new(self.db)
            .create(CreateInvitationParam {
                sender_id,
                recipient_id,
                group_id,
            })
            .await?;

        tracing::info!(
            "User {} invited user {} into group {}",
            sender_id,
            recipient_id,
            group_id
        );

        Ok(invitation)
    }

    /// Gets every invitation addressed to a user, newest first.
    pub async fn list_received(&self, user_id: i32) -> Result<Vec<Invitation>, AppError> {
        Ok(InvitationRepository::new(self.db)
            .get_by_recipient(user_id)
            .await?)
    }

    /// Accepts a pending invitation and adds the recipient to the group.
    ///
    /// # Returns
    /// - `Ok(Invitation)` - The accepted invitation
    /// - `Err(AppError::NotFound)` - No invitation with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - User is not the recipient
    /// - `Err(AppError::BadRequest)` - Invitation was already answered
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn accept(&self, invitation_id: i32, user_id: i32) -> Result<Invitation, AppError> {
        let txn = self.db.begin().await?;
        let invitation_repo = InvitationRepository::new(&txn);

        let invitation = invitation_repo
            .find_by_id(invitation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invitation not found".to_string()))?;
        Self::check_answerable(&invitation, user_id)?;

        let membership_repo = UserGroupRepository::new(&txn);
        if membership_repo
            .find(user_id, invitation.group_id)
            .await?
            .is_none()
        {
            membership_repo
                .create(user_id, invitation.group_id, GroupRole::Member)
                .await?;
        }

        let invitation = invitation_repo
            .update_status(invitation_id, InvitationStatus::Accepted, Some(Utc::now()))
            .await?
            .ok_or(InternalError::MissingAfterWrite {
                entity: "Invitation",
                id: invitation_id,
            })?;

        txn.commit().await?;

        tracing::info!(
            "User {} accepted invitation {} into group {}",
            user_id,
            invitation.id,
            invitation.group_id
        );

        Ok(invitation)
    }

    /// Declines a pending invitation.
    ///
    /// # Returns
    /// - `Ok(Invitation)` - The declined invitation
    /// - `Err(AppError::NotFound)` - No invitation with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - User is not the recipient
    /// - `Err(AppError::BadRequest)` - Invitation was already answered
    pub async fn decline(&self, invitation_id: i32, user_id: i32) -> Result<Invitation, AppError> {
        let invitation_repo = InvitationRepository::new(self.db);

        let invitation = invitation_repo
            .find_by_id(invitation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invitation not found".to_string()))?;
        Self::check_answerable(&invitation, user_id)?;

        let invitation = invitation_repo
            .update_status(invitation_id, InvitationStatus::Declined, None)
            .await?
            .ok_or(InternalError::MissingAfterWrite {
                entity: "Invitation",
                id: invitation_id,
            })?;

        Ok(invitation)
    }

    fn check_answerable(invitation: &Invitation, user_id: i32) -> Result<(), AppError> {
        if invitation.recipient_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("User is not the recipient of invitation {}", invitation.id),
            )
            .into());
        }
        if invitation.status != InvitationStatus::Pending {
            return Err(AppError::BadRequest(
                "Invitation has already been answered".to_string(),
            ));
        }

        Ok(())
    }
}
