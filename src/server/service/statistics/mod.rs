//! Statistics service.
//!
//! Loads a user's time-sheets with their task entries and aggregates them in memory
//! into a summary, a category breakdown and day/week/month distributions. A user
//! without time-sheets gets a zeroed result labelled `empty` rather than an error.

pub mod aggregate;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        group::GroupRepository, time_sheet::TimeSheetRepository,
        time_sheet_task::TimeSheetTaskRepository, user::UserRepository,
        user_group::UserGroupRepository,
    },
    error::AppError,
    model::{
        statistics::{GroupStatistics, Statistics},
        time_sheet::{DateRange, TimeSheet, TimeSheetEntry},
        user::User,
    },
};

use aggregate::Bucket;

const EMPTY_PERIOD: &str = "empty";
const CUSTOM_PERIOD: &str = "custom";

/// Service computing statistics for users and groups.
pub struct StatisticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticsService<'a> {
    /// Creates a new StatisticsService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StatisticsService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes statistics over all of a user's time-sheets.
    ///
    /// # Returns
    /// - `Ok(Statistics)` - Aggregated statistics, zeroed if the user has no time-sheets
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error while loading rows
    pub async fn user_statistics(&self, user_id: i32) -> Result<Statistics, AppError> {
        let user = self.find_user(user_id).await?;
        let (time_sheets, entries) = self.load(user_id, DateRange::default()).await?;

        if time_sheets.is_empty() {
            return Ok(empty_statistics(&user));
        }

        Ok(Statistics {
            summary: aggregate::summarize(&user, &time_sheets, &entries),
            categories: aggregate::categorize(&entries),
            daily_stats: aggregate::period_stats("day", Bucket::Day, &time_sheets, &entries),
            weekly_stats: aggregate::period_stats("week", Bucket::Week, &time_sheets, &entries),
            monthly_stats: aggregate::period_stats("month", Bucket::Month, &time_sheets, &entries),
        })
    }

    /// Computes statistics over a user's time-sheets between two inclusive dates.
    ///
    /// The day distribution is labelled `custom`; week and month distributions cover
    /// the same filtered time-sheets.
    ///
    /// # Returns
    /// - `Ok(Statistics)` - Aggregated statistics for the period
    /// - `Err(AppError::BadRequest)` - `start` is after `end`
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn user_statistics_for_period(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Statistics, AppError> {
        if start > end {
            return Err(AppError::BadRequest(
                "Start date must not be after end date".to_string(),
            ));
        }

        let user = self.find_user(user_id).await?;
        let range = DateRange::new(Some(start), Some(end));
        let (time_sheets, entries) = self.load(user_id, range).await?;

        if time_sheets.is_empty() {
            return Ok(empty_statistics(&user));
        }

        Ok(Statistics {
            summary: aggregate::summarize(&user, &time_sheets, &entries),
            categories: aggregate::categorize(&entries),
            daily_stats: aggregate::period_stats(CUSTOM_PERIOD, Bucket::Day, &time_sheets, &entries),
            weekly_stats: aggregate::period_stats("week", Bucket::Week, &time_sheets, &entries),
            monthly_stats: aggregate::period_stats("month", Bucket::Month, &time_sheets, &entries),
        })
    }

    /// Computes a summary for every member of a group who has at least one time-sheet.
    ///
    /// # Returns
    /// - `Ok(GroupStatistics)` - Member summaries ordered by user ID
    /// - `Err(AppError::NotFound)` - No group with that ID
    pub async fn group_statistics(&self, group_id: i32) -> Result<GroupStatistics, AppError> {
        if GroupRepository::new(self.db)
            .find_by_id(group_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        let members = UserGroupRepository::new(self.db)
            .get_by_group_id_with_users(group_id)
            .await?;

        let mut summaries = Vec::new();
        for member in members {
            let (time_sheets, entries) = self.load(member.user.id, DateRange::default()).await?;
            if time_sheets.is_empty() {
                continue;
            }

            summaries.push(aggregate::summarize(&member.user, &time_sheets, &entries));
        }

        Ok(GroupStatistics {
            group_id,
            members: summaries,
        })
    }

    async fn find_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn load(
        &self,
        user_id: i32,
        range: DateRange,
    ) -> Result<(Vec<TimeSheet>, Vec<TimeSheetEntry>), AppError> {
        let time_sheets = TimeSheetRepository::new(self.db)
            .get_by_user_id_between(user_id, range)
            .await?;
        let ids: Vec<i32> = time_sheets.iter().map(|ts| ts.id).collect();
        let entries = TimeSheetTaskRepository::new(self.db)
            .get_by_time_sheet_ids_with_tasks(&ids)
            .await?;

        Ok((time_sheets, entries))
    }
}

fn empty_statistics(user: &User) -> Statistics {
    Statistics {
        summary: aggregate::empty_summary(user),
        categories: Vec::new(),
        daily_stats: aggregate::empty_period(EMPTY_PERIOD),
        weekly_stats: aggregate::empty_period(EMPTY_PERIOD),
        monthly_stats: aggregate::empty_period(EMPTY_PERIOD),
    }
}
