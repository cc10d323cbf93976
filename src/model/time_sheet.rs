use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Access granted by a share, stored as its upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessLevel {
    Read,
    Write,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
        }
    }

    /// Unknown stored values fall back to `Read`.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "WRITE" => Self::Write,
            _ => Self::Read,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeSheetDto {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeSheetTaskDto {
    pub task_id: i32,
    pub task_name: String,
    pub repetition: Option<String>,
    /// Seconds spent on the task.
    pub duration: i32,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeSheetDetailDto {
    #[serde(flatten)]
    pub time_sheet: TimeSheetDto,
    pub tasks: Vec<TimeSheetTaskDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTimeSheetDto {
    /// Defaults to today when omitted.
    pub entry_date: Option<NaiveDate>,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Groups to share the new time-sheet with, requester must own each of them.
    #[serde(default)]
    pub shared_with_groups: Vec<i32>,
    #[serde(default)]
    pub shared_access_level: Option<AccessLevel>,
}

/// Replaces the editable fields of a time-sheet. An omitted `entry_date` keeps the
/// stored one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTimeSheetDto {
    pub entry_date: Option<NaiveDate>,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddTaskDto {
    pub task_id: i32,
    #[serde(default)]
    pub duration: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateDurationDto {
    pub duration: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCompletionDto {
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShareDto {
    pub time_sheet_id: i32,
    /// User or group the time-sheet is shared with.
    pub target_id: i32,
    pub access_level: AccessLevel,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ShareQuery {
    pub access_level: AccessLevel,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DateRangeQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ByDateQuery {
    pub date: NaiveDate,
}
