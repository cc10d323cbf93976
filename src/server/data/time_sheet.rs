//! Time-sheet data repository for database operations.
//!
//! Provides the `TimeSheetRepository` for owned time-sheets, date filtered listings and
//! the listings of time-sheets shared with a user or a group. Listings are ordered by
//! entry date then ID.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::model::time_sheet::{DateRange, TimeSheet, TimeSheetParam};

/// Repository providing database operations for time-sheets.
pub struct TimeSheetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimeSheetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a time-sheet owned by `user_id`.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the time-sheet
    /// - `param` - Editable time-sheet fields
    ///
    /// # Returns
    /// - `Ok(TimeSheet)` - The created time-sheet
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an
    ///   unknown owner
    pub async fn create(&self, user_id: i32, param: TimeSheetParam) -> Result<TimeSheet, DbErr> {
        let entity = entity::time_sheet::ActiveModel {
            entry_date: ActiveValue::Set(param.entry_date),
            title: ActiveValue::Set(param.title),
            icon: ActiveValue::Set(param.icon),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TimeSheet::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<TimeSheet>, DbErr> {
        let entity = entity::prelude::TimeSheet::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(TimeSheet::from_entity))
    }

    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<TimeSheet>, DbErr> {
        self.get_by_user_id_between(user_id, DateRange::default())
            .await
    }

    /// Gets the time-sheets of a user whose entry date falls inside `range`.
    ///
    /// Both bounds are inclusive and each one is only applied when present.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the time-sheets
    /// - `range` - Optional start and end dates
    ///
    /// # Returns
    /// - `Ok(Vec<TimeSheet>)` - Matching time-sheets ordered by entry date then ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_id_between(
        &self,
        user_id: i32,
        range: DateRange,
    ) -> Result<Vec<TimeSheet>, DbErr> {
        let mut query = entity::prelude::TimeSheet::find()
            .filter(entity::time_sheet::Column::UserId.eq(user_id));

        if let Some(start) = range.start {
            query = query.filter(entity::time_sheet::Column::EntryDate.gte(start));
        }
        if let Some(end) = range.end {
            query = query.filter(entity::time_sheet::Column::EntryDate.lte(end));
        }

        self.fetch_ordered(query).await
    }

    /// Gets the time-sheets of a user recorded on `date`.
    pub async fn get_by_entry_date(
        &self,
        user_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<TimeSheet>, DbErr> {
        let query = entity::prelude::TimeSheet::find()
            .filter(entity::time_sheet::Column::UserId.eq(user_id))
            .filter(entity::time_sheet::Column::EntryDate.eq(date));

        self.fetch_ordered(query).await
    }

    /// Gets the time-sheets directly shared with a user.
    pub async fn get_shared_with_user(&self, user_id: i32) -> Result<Vec<TimeSheet>, DbErr> {
        let query = entity::prelude::TimeSheet::find()
            .join(
                JoinType::InnerJoin,
                entity::time_sheet::Relation::TimeSheetShareUser.def(),
            )
            .filter(entity::time_sheet_share_user::Column::UserId.eq(user_id));

        self.fetch_ordered(query).await
    }

    /// Gets the time-sheets shared with a group.
    pub async fn get_shared_with_group(&self, group_id: i32) -> Result<Vec<TimeSheet>, DbErr> {
        let query = entity::prelude::TimeSheet::find()
            .join(
                JoinType::InnerJoin,
                entity::time_sheet::Relation::TimeSheetShareGroup.def(),
            )
            .filter(entity::time_sheet_share_group::Column::GroupId.eq(group_id));

        self.fetch_ordered(query).await
    }

    /// Overwrites the editable fields of a time-sheet, the owner is preserved.
    ///
    /// # Returns
    /// - `Ok(Some(TimeSheet))` - The updated time-sheet
    /// - `Ok(None)` - No time-sheet with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: TimeSheetParam,
    ) -> Result<Option<TimeSheet>, DbErr> {
        let Some(entity) = entity::prelude::TimeSheet::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::time_sheet::ActiveModel = entity.into();
        active.entry_date = ActiveValue::Set(param.entry_date);
        active.title = ActiveValue::Set(param.title);
        active.icon = ActiveValue::Set(param.icon);
        active.start_date = ActiveValue::Set(param.start_date);
        active.end_date = ActiveValue::Set(param.end_date);
        active.start_time = ActiveValue::Set(param.start_time);
        active.end_time = ActiveValue::Set(param.end_time);
        let entity = active.update(self.db).await?;

        Ok(Some(TimeSheet::from_entity(entity)))
    }

    /// Deletes the time-sheet row. Task entries and shares must be removed first.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TimeSheet::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn fetch_ordered(
        &self,
        query: Select<entity::time_sheet::Entity>,
    ) -> Result<Vec<TimeSheet>, DbErr> {
        let entities = query
            .order_by_asc(entity::time_sheet::Column::EntryDate)
            .order_by_asc(entity::time_sheet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TimeSheet::from_entity).collect())
    }
}
