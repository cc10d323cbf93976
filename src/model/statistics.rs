use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserStatsSummaryDto {
    pub user_id: i32,
    pub user_name: String,
    pub total_time_sheets: u64,
    pub total_tasks: u64,
    pub completed_tasks: u64,
    /// Seconds.
    pub total_time: i64,
    /// Percentage of completed task entries, 0 to 100.
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskStatsDto {
    pub task_id: i32,
    pub task_name: String,
    pub icon: String,
    pub total_time: i64,
    pub completed: bool,
    pub percentage_of_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryStatsDto {
    pub category: String,
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub total_time: i64,
    pub completion_rate: f64,
    pub tasks: Vec<TaskStatsDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PeriodStatsDto {
    pub period: String,
    /// Seconds per bucket key.
    pub time_distribution: BTreeMap<String, i64>,
    pub total_time: i64,
    pub total_tasks: u64,
    pub completed_tasks: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatisticsDto {
    pub summary: UserStatsSummaryDto,
    pub categories: Vec<CategoryStatsDto>,
    pub daily_stats: PeriodStatsDto,
    pub weekly_stats: PeriodStatsDto,
    pub monthly_stats: PeriodStatsDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupStatisticsDto {
    pub group_id: i32,
    pub members: Vec<UserStatsSummaryDto>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PeriodQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
