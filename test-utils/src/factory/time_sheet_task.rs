//! Factory for task entries attached to a time-sheet.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for time-sheet task entries. Defaults to zero seconds, not completed.
pub struct TimeSheetTaskFactory<'a> {
    db: &'a DatabaseConnection,
    time_sheet_id: i32,
    task_id: i32,
    duration: i32,
    completed: bool,
}

impl<'a> TimeSheetTaskFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, time_sheet_id: i32, task_id: i32) -> Self {
        Self {
            db,
            time_sheet_id,
            task_id,
            duration: 0,
            completed: false,
        }
    }

    /// Duration in seconds.
    pub fn duration(mut self, duration: i32) -> Self {
        self.duration = duration;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub async fn build(self) -> Result<entity::time_sheet_task::Model, DbErr> {
        entity::time_sheet_task::ActiveModel {
            task_id: ActiveValue::Set(self.task_id),
            time_sheet_id: ActiveValue::Set(self.time_sheet_id),
            duration: ActiveValue::Set(self.duration),
            completed: ActiveValue::Set(self.completed),
        }
        .insert(self.db)
        .await
    }
}

/// Attaches `task_id` to `time_sheet_id` with the given duration in seconds.
pub async fn create_time_sheet_task(
    db: &DatabaseConnection,
    time_sheet_id: i32,
    task_id: i32,
    duration: i32,
) -> Result<entity::time_sheet_task::Model, DbErr> {
    TimeSheetTaskFactory::new(db, time_sheet_id, task_id)
        .duration(duration)
        .build()
        .await
}
