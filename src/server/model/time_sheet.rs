//! Time-sheet domain models and parameters.
//!
//! A time-sheet belongs to one user and records time spent on tasks for an entry
//! date. Task entries and shares are keyed by composite primary keys in the
//! database; the domain models here flatten those rows for the service layer.

use chrono::NaiveDate;

use crate::{
    model::time_sheet::{AccessLevel, ShareDto, TimeSheetDetailDto, TimeSheetDto, TimeSheetTaskDto},
    server::model::task::Task,
};

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSheet {
    pub id: i32,
    pub entry_date: NaiveDate,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub user_id: i32,
}

impl TimeSheet {
    pub fn into_dto(self) -> TimeSheetDto {
        TimeSheetDto {
            id: self.id,
            entry_date: self.entry_date,
            title: self.title,
            icon: self.icon,
            start_date: self.start_date,
            end_date: self.end_date,
            start_time: self.start_time,
            end_time: self.end_time,
            user_id: self.user_id,
        }
    }

    pub fn from_entity(entity: entity::time_sheet::Model) -> Self {
        Self {
            id: entity.id,
            entry_date: entity.entry_date,
            title: entity.title,
            icon: entity.icon,
            start_date: entity.start_date,
            end_date: entity.end_date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            user_id: entity.user_id,
        }
    }
}

/// A task attached to a time-sheet together with the time spent on it.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSheetEntry {
    pub time_sheet_id: i32,
    pub task: Task,
    /// Seconds.
    pub duration: i32,
    pub completed: bool,
}

impl TimeSheetEntry {
    pub fn into_dto(self) -> TimeSheetTaskDto {
        TimeSheetTaskDto {
            task_id: self.task.id,
            task_name: self.task.name,
            repetition: self.task.repetition,
            duration: self.duration,
            completed: self.completed,
        }
    }

    /// Builds an entry from a join row and its loaded task.
    pub fn from_entity(entity: entity::time_sheet_task::Model, task: entity::task::Model) -> Self {
        Self {
            time_sheet_id: entity.time_sheet_id,
            task: Task::from_entity(task),
            duration: entity.duration,
            completed: entity.completed,
        }
    }
}

/// Time-sheet with its task entries.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSheetDetail {
    pub time_sheet: TimeSheet,
    pub entries: Vec<TimeSheetEntry>,
}

impl TimeSheetDetail {
    pub fn into_dto(self) -> TimeSheetDetailDto {
        TimeSheetDetailDto {
            time_sheet: self.time_sheet.into_dto(),
            tasks: self.entries.into_iter().map(TimeSheetEntry::into_dto).collect(),
        }
    }
}

/// A share of a time-sheet with a user or a group.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub time_sheet_id: i32,
    pub target_id: i32,
    pub access_level: AccessLevel,
}

impl Share {
    pub fn into_dto(self) -> ShareDto {
        ShareDto {
            time_sheet_id: self.time_sheet_id,
            target_id: self.target_id,
            access_level: self.access_level,
        }
    }

    pub fn from_user_entity(entity: entity::time_sheet_share_user::Model) -> Self {
        Self {
            time_sheet_id: entity.time_sheet_id,
            target_id: entity.user_id,
            access_level: AccessLevel::from_stored(&entity.access_level),
        }
    }

    pub fn from_group_entity(entity: entity::time_sheet_share_group::Model) -> Self {
        Self {
            time_sheet_id: entity.time_sheet_id,
            target_id: entity.group_id,
            access_level: AccessLevel::from_stored(&entity.access_level),
        }
    }
}

/// Editable fields of a time-sheet, used for both insert and update.
#[derive(Debug, Clone)]
pub struct TimeSheetParam {
    pub entry_date: NaiveDate,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// New time-sheet with the groups it is shared with from the start.
#[derive(Debug, Clone)]
pub struct CreateTimeSheetParam {
    pub time_sheet: TimeSheetParam,
    pub shared_with_groups: Vec<i32>,
    pub shared_access_level: AccessLevel,
}

/// Optional inclusive date bounds applied to `entry_date`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = DateRange::new(Some(day(5)), Some(day(10)));

        assert!(range.contains(day(5)));
        assert!(range.contains(day(10)));
        assert!(!range.contains(day(4)));
        assert!(!range.contains(day(11)));
    }

    #[test]
    fn single_bound_filters_one_side() {
        assert!(DateRange::new(Some(day(5)), None).contains(day(30)));
        assert!(!DateRange::new(Some(day(5)), None).contains(day(1)));
        assert!(DateRange::new(None, Some(day(5))).contains(day(1)));
        assert!(DateRange::default().contains(day(1)));
    }
}
