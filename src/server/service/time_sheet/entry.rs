//! Task entries of a time-sheet.
//!
//! Durations are seconds and can never be negative. A task can be attached to a
//! given time-sheet only once.

use crate::server::{
    data::{
        task::TaskRepository,
        time_sheet::TimeSheetRepository,
        time_sheet_task::{TimeSheetTaskRepository, UpdateEntryParam},
    },
    error::AppError,
    model::time_sheet::TimeSheetEntry,
};

use super::TimeSheetService;

impl<'a> TimeSheetService<'a> {
    /// Attaches a task to a time-sheet as not completed.
    ///
    /// # Arguments
    /// - `time_sheet_id` - Time-sheet receiving the task
    /// - `task_id` - Task to attach
    /// - `duration` - Seconds already spent on the task
    ///
    /// # Returns
    /// - `Ok(TimeSheetEntry)` - The created entry
    /// - `Err(AppError::BadRequest)` - Negative duration, unknown time-sheet or task, or
    ///   task already attached
    pub async fn add_task_to_time_sheet(
        &self,
        time_sheet_id: i32,
        task_id: i32,
        duration: i32,
    ) -> Result<TimeSheetEntry, AppError> {
        check_duration(duration)?;

        if TimeSheetRepository::new(self.db)
            .find_by_id(time_sheet_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("Time-sheet not found".to_string()));
        }
        let task = TaskRepository::new(self.db)
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Task not found".to_string()))?;

        let entry_repo = TimeSheetTaskRepository::new(self.db);
        if entry_repo.find(time_sheet_id, task_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "Task is already attached to this time-sheet".to_string(),
            ));
        }

        Ok(entry_repo.create(time_sheet_id, task, duration).await?)
    }

    /// Sets the time spent on an attached task.
    ///
    /// # Returns
    /// - `Ok(TimeSheetEntry)` - The updated entry
    /// - `Err(AppError::BadRequest)` - Negative duration or task not attached
    pub async fn update_task_duration(
        &self,
        time_sheet_id: i32,
        task_id: i32,
        duration: i32,
    ) -> Result<TimeSheetEntry, AppError> {
        check_duration(duration)?;

        self.update_entry(
            time_sheet_id,
            task_id,
            UpdateEntryParam {
                duration: Some(duration),
                completed: None,
            },
        )
        .await
    }

    /// Marks an attached task as completed or not.
    ///
    /// # Returns
    /// - `Ok(TimeSheetEntry)` - The updated entry
    /// - `Err(AppError::BadRequest)` - Task not attached
    pub async fn update_task_completion_state(
        &self,
        time_sheet_id: i32,
        task_id: i32,
        completed: bool,
    ) -> Result<TimeSheetEntry, AppError> {
        self.update_entry(
            time_sheet_id,
            task_id,
            UpdateEntryParam {
                duration: None,
                completed: Some(completed),
            },
        )
        .await
    }

    /// Detaches a task from a time-sheet.
    ///
    /// # Returns
    /// - `Ok(())` - Entry removed
    /// - `Err(AppError::BadRequest)` - Task not attached
    pub async fn remove_task_from_time_sheet(
        &self,
        time_sheet_id: i32,
        task_id: i32,
    ) -> Result<(), AppError> {
        let removed = TimeSheetTaskRepository::new(self.db)
            .delete(time_sheet_id, task_id)
            .await?;

        if !removed {
            return Err(not_attached());
        }

        Ok(())
    }

    async fn update_entry(
        &self,
        time_sheet_id: i32,
        task_id: i32,
        param: UpdateEntryParam,
    ) -> Result<TimeSheetEntry, AppError> {
        TimeSheetTaskRepository::new(self.db)
            .update(time_sheet_id, task_id, param)
            .await?
            .ok_or_else(not_attached)
    }
}

fn check_duration(duration: i32) -> Result<(), AppError> {
    if duration < 0 {
        return Err(AppError::BadRequest(
            "Duration cannot be negative".to_string(),
        ));
    }

    Ok(())
}

fn not_attached() -> AppError {
    AppError::BadRequest("Task is not attached to this time-sheet".to_string())
}
