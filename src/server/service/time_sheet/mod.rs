//! Time-sheet service for business logic.
//!
//! This module provides the `TimeSheetService` for managing a user's time-sheets, the
//! tasks recorded on them, their shares and their exports.
//!
//! The service is organized into separate modules by concern:
//! - `entry` - Attaching tasks and updating their duration or completion
//! - `share` - Sharing with users and groups
//! - `export` - CSV and PDF exports of a user's time-sheets

pub mod entry;
pub mod export;
pub mod share;

use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        time_sheet::TimeSheetRepository, time_sheet_share::TimeSheetShareRepository,
        time_sheet_task::TimeSheetTaskRepository,
    },
    error::{auth::AuthError, AppError},
    model::time_sheet::{
        CreateTimeSheetParam, DateRange, TimeSheet, TimeSheetDetail, TimeSheetParam,
    },
    service::user_group::UserGroupService,
};

/// Service providing business logic for time-sheets.
///
/// Permission checks on individual time-sheets happen in the controller guard; the
/// service only enforces the rules that depend on the request payload.
pub struct TimeSheetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimeSheetService<'a> {
    /// Creates a new TimeSheetService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TimeSheetService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's time-sheets within an optional inclusive date range.
    ///
    /// # Returns
    /// - `Ok(Vec<TimeSheet>)` - Time-sheets ordered by entry date then ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_for_user(
        &self,
        user_id: i32,
        range: DateRange,
    ) -> Result<Vec<TimeSheet>, AppError> {
        Ok(TimeSheetRepository::new(self.db)
            .get_by_user_id_between(user_id, range)
            .await?)
    }

    /// Retrieves a time-sheet with its task entries.
    ///
    /// # Returns
    /// - `Ok(TimeSheetDetail)` - Time-sheet found
    /// - `Err(AppError::NotFound)` - No time-sheet with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<TimeSheetDetail, AppError> {
        let time_sheet = TimeSheetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Time-sheet not found".to_string()))?;

        let entries = TimeSheetTaskRepository::new(self.db)
            .get_by_time_sheet_ids_with_tasks(&[id])
            .await?;

        Ok(TimeSheetDetail {
            time_sheet,
            entries,
        })
    }

    pub async fn get_by_date(
        &self,
        user_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<TimeSheet>, AppError> {
        Ok(TimeSheetRepository::new(self.db)
            .get_by_entry_date(user_id, date)
            .await?)
    }

    /// Creates a time-sheet and optionally shares it with groups.
    ///
    /// The owner must hold `OWNER` in every group listed in `shared_with_groups`.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the new time-sheet
    /// - `param` - Time-sheet fields and initial group shares
    ///
    /// # Returns
    /// - `Ok(TimeSheet)` - The created time-sheet
    /// - `Err(AppError::AuthErr(AccessDenied))` - User does not own one of the groups
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn create(
        &self,
        user_id: i32,
        param: CreateTimeSheetParam,
    ) -> Result<TimeSheet, AppError> {
        let membership_service = UserGroupService::new(self.db);
        for &group_id in &param.shared_with_groups {
            if !membership_service.is_group_owner(user_id, group_id).await? {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!("User does not own group {} to share with", group_id),
                )
                .into());
            }
        }

        let txn = self.db.begin().await?;

        let time_sheet = TimeSheetRepository::new(&txn)
            .create(user_id, param.time_sheet)
            .await?;

        let share_repo = TimeSheetShareRepository::new(&txn);
        for group_id in param.shared_with_groups {
            share_repo
                .upsert_group_share(time_sheet.id, group_id, param.shared_access_level)
                .await?;
        }

        txn.commit().await?;

        tracing::debug!("User {} created time-sheet {}", user_id, time_sheet.id);

        Ok(time_sheet)
    }

    /// Overwrites the editable fields of a time-sheet, keeping its owner.
    ///
    /// # Returns
    /// - `Ok(TimeSheet)` - The updated time-sheet
    /// - `Err(AppError::BadRequest)` - No time-sheet with that ID
    pub async fn update(&self, id: i32, param: TimeSheetParam) -> Result<TimeSheet, AppError> {
        TimeSheetRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::BadRequest("Time-sheet not found".to_string()))
    }

    /// Deletes a time-sheet with its task entries and shares.
    ///
    /// # Returns
    /// - `Ok(())` - Time-sheet deleted
    /// - `Err(AppError::NotFound)` - No time-sheet with that ID
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let time_sheet_repo = TimeSheetRepository::new(&txn);
        if time_sheet_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Time-sheet not found".to_string()));
        }

        TimeSheetTaskRepository::new(&txn)
            .delete_by_time_sheet_id(id)
            .await?;
        TimeSheetShareRepository::new(&txn)
            .delete_by_time_sheet_id(id)
            .await?;
        time_sheet_repo.delete(id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Today's date in UTC, used when a time-sheet is created without an entry date.
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }
}
