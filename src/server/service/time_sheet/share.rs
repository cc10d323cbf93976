//! Sharing time-sheets with users and groups.
//!
//! Sharing the same time-sheet with the same target again replaces the access level.

use crate::{
    model::time_sheet::AccessLevel,
    server::{
        data::{
            group::GroupRepository, time_sheet::TimeSheetRepository,
            time_sheet_share::TimeSheetShareRepository, user::UserRepository,
        },
        error::AppError,
        model::time_sheet::{Share, TimeSheet},
    },
};

use super::TimeSheetService;

impl<'a> TimeSheetService<'a> {
    /// Shares a time-sheet with a user.
    ///
    /// # Returns
    /// - `Ok(Share)` - The created or updated share
    /// - `Err(AppError::BadRequest)` - Unknown time-sheet or user
    pub async fn share_with_user(
        &self,
        time_sheet_id: i32,
        user_id: i32,
        access_level: AccessLevel,
    ) -> Result<Share, AppError> {
        self.check_time_sheet_exists(time_sheet_id).await?;
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("User not found".to_string()));
        }

        let share = TimeSheetShareRepository::new(self.db)
            .upsert_user_share(time_sheet_id, user_id, access_level)
            .await?;

        tracing::debug!(
            "Shared time-sheet {} with user {} ({})",
            time_sheet_id,
            user_id,
            access_level.as_str()
        );

        Ok(share)
    }

    /// Shares a time-sheet with a group.
    ///
    /// # Returns
    /// - `Ok(Share)` - The created or updated share
    /// - `Err(AppError::BadRequest)` - Unknown time-sheet or group
    pub async fn share_with_group(
        &self,
        time_sheet_id: i32,
        group_id: i32,
        access_level: AccessLevel,
    ) -> Result<Share, AppError> {
        self.check_time_sheet_exists(time_sheet_id).await?;
        if GroupRepository::new(self.db)
            .find_by_id(group_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("Group not found".to_string()));
        }

        let share = TimeSheetShareRepository::new(self.db)
            .upsert_group_share(time_sheet_id, group_id, access_level)
            .await?;

        tracing::debug!(
            "Shared time-sheet {} with group {} ({})",
            time_sheet_id,
            group_id,
            access_level.as_str()
        );

        Ok(share)
    }

    /// Gets the time-sheets shared directly with a user.
    pub async fn list_shared_with_user(&self, user_id: i32) -> Result<Vec<TimeSheet>, AppError> {
        Ok(TimeSheetRepository::new(self.db)
            .get_shared_with_user(user_id)
            .await?)
    }

    /// Gets the time-sheets shared with a group.
    pub async fn list_shared_with_group(&self, group_id: i32) -> Result<Vec<TimeSheet>, AppError> {
        Ok(TimeSheetRepository::new(self.db)
            .get_shared_with_group(group_id)
            .await?)
    }

    async fn check_time_sheet_exists(&self, time_sheet_id: i32) -> Result<(), AppError> {
        if TimeSheetRepository::new(self.db)
            .find_by_id(time_sheet_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("Time-sheet not found".to_string()));
        }

        Ok(())
    }
}
