//! Time-sheet share repository.
//!
//! Provides the `TimeSheetShareRepository` covering both share tables. Shares are keyed
//! by `(time_sheet_id, target_id)`; sharing again with the same target upserts the
//! access level instead of adding a row.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{model::time_sheet::AccessLevel, server::model::time_sheet::Share};

/// Repository providing database operations for user and group shares.
pub struct TimeSheetShareRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimeSheetShareRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Shares a time-sheet with a user or updates the existing share's access level.
    ///
    /// # Arguments
    /// - `time_sheet_id` - Time-sheet to share
    /// - `user_id` - User receiving access
    /// - `access_level` - Level stored on the share
    ///
    /// # Returns
    /// - `Ok(Share)` - The created or updated share
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_user_share(
        &self,
        time_sheet_id: i32,
        user_id: i32,
        access_level: AccessLevel,
    ) -> Result<Share, DbErr> {
        let entity = entity::prelude::TimeSheetShareUser::insert(
            entity::time_sheet_share_user::ActiveModel {
                time_sheet_id: ActiveValue::Set(time_sheet_id),
                user_id: ActiveValue::Set(user_id),
                access_level: ActiveValue::Set(access_level.as_str().to_string()),
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::time_sheet_share_user::Column::TimeSheetId,
                entity::time_sheet_share_user::Column::UserId,
            ])
            .update_column(entity::time_sheet_share_user::Column::AccessLevel)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Share::from_user_entity(entity))
    }

    /// Shares a time-sheet with a group or updates the existing share's access level.
    pub async fn upsert_group_share(
        &self,
        time_sheet_id: i32,
        group_id: i32,
        access_level: AccessLevel,
    ) -> Result<Share, DbErr> {
        let entity = entity::prelude::TimeSheetShareGroup::insert(
            entity::time_sheet_share_group::ActiveModel {
                time_sheet_id: ActiveValue::Set(time_sheet_id),
                group_id: ActiveValue::Set(group_id),
                access_level: ActiveValue::Set(access_level.as_str().to_string()),
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::time_sheet_share_group::Column::TimeSheetId,
                entity::time_sheet_share_group::Column::GroupId,
            ])
            .update_column(entity::time_sheet_share_group::Column::AccessLevel)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Share::from_group_entity(entity))
    }

    /// Gets the user shares of a time-sheet ordered by user ID.
    pub async fn get_user_shares(&self, time_sheet_id: i32) -> Result<Vec<Share>, DbErr> {
        let entities = entity::prelude::TimeSheetShareUser::find()
            .filter(entity::time_sheet_share_user::Column::TimeSheetId.eq(time_sheet_id))
            .order_by_asc(entity::time_sheet_share_user::Column::UserId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Share::from_user_entity).collect())
    }

    /// Gets the group shares of a time-sheet ordered by group ID.
    pub async fn get_group_shares(&self, time_sheet_id: i32) -> Result<Vec<Share>, DbErr> {
        let entities = entity::prelude::TimeSheetShareGroup::find()
            .filter(entity::time_sheet_share_group::Column::TimeSheetId.eq(time_sheet_id))
            .order_by_asc(entity::time_sheet_share_group::Column::GroupId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Share::from_group_entity).collect())
    }

    /// Removes both user and group shares of a time-sheet.
    pub async fn delete_by_time_sheet_id(&self, time_sheet_id: i32) -> Result<u64, DbErr> {
        let users = entity::prelude::TimeSheetShareUser::delete_many()
            .filter(entity::time_sheet_share_user::Column::TimeSheetId.eq(time_sheet_id))
            .exec(self.db)
            .await?;
        let groups = entity::prelude::TimeSheetShareGroup::delete_many()
            .filter(entity::time_sheet_share_group::Column::TimeSheetId.eq(time_sheet_id))
            .exec(self.db)
            .await?;

        Ok(users.rows_affected + groups.rows_affected)
    }

    pub async fn delete_group_shares_by_group_id(&self, group_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TimeSheetShareGroup::delete_many()
            .filter(entity::time_sheet_share_group::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_user_shares_by_user_id(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TimeSheetShareUser::delete_many()
            .filter(entity::time_sheet_share_user::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
