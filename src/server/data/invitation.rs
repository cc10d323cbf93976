//! Invitation data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::invitation::{CreateInvitationParam, Invitation, InvitationStatus};

/// Repository providing database operations for group invitations.
pub struct InvitationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvitationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a `PENDING` invitation created now.
    pub async fn create(&self, param: CreateInvitationParam) -> Result<Invitation, DbErr> {
        let entity = entity::invitation::ActiveModel {
            status: ActiveValue::Set(InvitationStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            accepted_at: ActiveValue::Set(None),
            sender_id: ActiveValue::Set(param.sender_id),
            recipient_id: ActiveValue::Set(param.recipient_id),
            group_id: ActiveValue::Set(param.group_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Invitation::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Invitation>, DbErr> {
        let entity = entity::prelude::Invitation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Invitation::from_entity))
    }

    /// Gets the invitations received by a user, newest first.
    pub async fn get_by_recipient(&self, recipient_id: i32) -> Result<Vec<Invitation>, DbErr> {
        let entities = entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::RecipientId.eq(recipient_id))
            .order_by_desc(entity::invitation::Column::CreatedAt)
            .order_by_desc(entity::invitation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Invitation::from_entity).collect())
    }

    pub async fn get_by_group(&self, group_id: i32) -> Result<Vec<Invitation>, DbErr> {
        let entities = entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::GroupId.eq(group_id))
            .order_by_desc(entity::invitation::Column::CreatedAt)
            .order_by_desc(entity::invitation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Invitation::from_entity).collect())
    }

    /// Sets the status of an invitation and the time it was accepted, if any.
    ///
    /// # Returns
    /// - `Ok(Some(Invitation))` - The updated invitation
    /// - `Ok(None)` - No invitation with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        status: InvitationStatus,
        accepted_at: Option<DateTime<Utc>>,
    ) -> Result<Option<Invitation>, DbErr> {
        let Some(entity) = entity::prelude::Invitation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::invitation::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.accepted_at = ActiveValue::Set(accepted_at);
        let entity = active.update(self.db).await?;

        Ok(Some(Invitation::from_entity(entity)))
    }

    pub async fn delete_by_group_id(&self, group_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Invitation::delete_many()
            .filter(entity::invitation::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every invitation the user sent or received.
    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Invitation::delete_many()
            .filter(
                Condition::any()
                    .add(entity::invitation::Column::SenderId.eq(user_id))
                    .add(entity::invitation::Column::RecipientId.eq(user_id)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
