//! Statistics domain models.
//!
//! Produced by the statistics service from time-sheets and their task entries. Times
//! are in seconds, rates are percentages between 0 and 100.

use std::collections::BTreeMap;

use crate::model::statistics::{
    CategoryStatsDto, GroupStatisticsDto, PeriodStatsDto, StatisticsDto, TaskStatsDto,
    UserStatsSummaryDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct UserStatsSummary {
    pub user_id: i32,
    pub user_name: String,
    pub total_time_sheets: u64,
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub total_time: i64,
    pub completion_rate: f64,
}

impl UserStatsSummary {
    pub fn into_dto(self) -> UserStatsSummaryDto {
        UserStatsSummaryDto {
            user_id: self.user_id,
            user_name: self.user_name,
            total_time_sheets: self.total_time_sheets,
            total_tasks: self.total_tasks,
            completed_tasks: self.completed_tasks,
            total_time: self.total_time,
            completion_rate: self.completion_rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskStats {
    pub task_id: i32,
    pub task_name: String,
    pub icon: String,
    pub total_time: i64,
    pub completed: bool,
    pub percentage_of_total: f64,
}

impl TaskStats {
    pub fn into_dto(self) -> TaskStatsDto {
        TaskStatsDto {
            task_id: self.task_id,
            task_name: self.task_name,
            icon: self.icon,
            total_time: self.total_time,
            completed: self.completed,
            percentage_of_total: self.percentage_of_total,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStats {
    pub category: String,
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub total_time: i64,
    pub completion_rate: f64,
    pub tasks: Vec<TaskStats>,
}

impl CategoryStats {
    pub fn into_dto(self) -> CategoryStatsDto {
        CategoryStatsDto {
            category: self.category,
            total_tasks: self.total_tasks,
            completed_tasks: self.completed_tasks,
            total_time: self.total_time,
            completion_rate: self.completion_rate,
            tasks: self.tasks.into_iter().map(TaskStats::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodStats {
    pub period: String,
    pub time_distribution: BTreeMap<String, i64>,
    pub total_time: i64,
    pub total_tasks: u64,
    pub completed_tasks: u64,
}

impl PeriodStats {
    pub fn into_dto(self) -> PeriodStatsDto {
        PeriodStatsDto {
            period: self.period,
            time_distribution: self.time_distribution,
            total_time: self.total_time,
            total_tasks: self.total_tasks,
            completed_tasks: self.completed_tasks,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub summary: UserStatsSummary,
    pub categories: Vec<CategoryStats>,
    pub daily_stats: PeriodStats,
    pub weekly_stats: PeriodStats,
    pub monthly_stats: PeriodStats,
}

impl Statistics {
    pub fn into_dto(self) -> StatisticsDto {
        StatisticsDto {
            summary: self.summary.into_dto(),
            categories: self
                .categories
                .into_iter()
                .map(CategoryStats::into_dto)
                .collect(),
            daily_stats: self.daily_stats.into_dto(),
            weekly_stats: self.weekly_stats.into_dto(),
            monthly_stats: self.monthly_stats.into_dto(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupStatistics {
    pub group_id: i32,
    pub members: Vec<UserStatsSummary>,
}

impl GroupStatistics {
    pub fn into_dto(self) -> GroupStatisticsDto {
        GroupStatisticsDto {
            group_id: self.group_id,
            members: self
                .members
                .into_iter()
                .map(UserStatsSummary::into_dto)
                .collect(),
        }
    }
}
