//! Time-sheet task entry repository.
//!
//! Provides the `TimeSheetTaskRepository` for the `time_sheet_task` join table keyed by
//! `(task_id, time_sheet_id)`. Reads load the referenced task alongside each row.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{task::Task, time_sheet::TimeSheetEntry};

/// Fields of an entry to overwrite, `None` keeps the stored value.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateEntryParam {
    pub duration: Option<i32>,
    pub completed: Option<bool>,
}

/// Repository providing database operations for time-sheet task entries.
pub struct TimeSheetTaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimeSheetTaskRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Attaches a task to a time-sheet as not completed.
    ///
    /// # Arguments
    /// - `time_sheet_id` - Time-sheet receiving the task
    /// - `task` - Task to attach, already loaded by the caller
    /// - `duration` - Seconds spent on the task
    ///
    /// # Returns
    /// - `Ok(TimeSheetEntry)` - The created entry
    /// - `Err(DbErr)` - Database error, including a primary key violation when the task
    ///   is already attached
    pub async fn create(
        &self,
        time_sheet_id: i32,
        task: Task,
        duration: i32,
    ) -> Result<TimeSheetEntry, DbErr> {
        let entity = entity::time_sheet_task::ActiveModel {
            task_id: ActiveValue::Set(task.id),
            time_sheet_id: ActiveValue::Set(time_sheet_id),
            duration: ActiveValue::Set(duration),
            completed: ActiveValue::Set(false),
        }
        .insert(self.db)
        .await?;

        Ok(TimeSheetEntry {
            time_sheet_id: entity.time_sheet_id,
            task,
            duration: entity.duration,
            completed: entity.completed,
        })
    }

    pub async fn find(
        &self,
        time_sheet_id: i32,
        task_id: i32,
    ) -> Result<Option<TimeSheetEntry>, DbErr> {
        let row = entity::prelude::TimeSheetTask::find_by_id((task_id, time_sheet_id))
            .find_also_related(entity::prelude::Task)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(entry, task)| task.map(|task| TimeSheetEntry::from_entity(entry, task))))
    }

    /// Gets every entry of the provided time-sheets with its task loaded.
    ///
    /// # Returns
    /// - `Ok(Vec<TimeSheetEntry>)` - Entries ordered by time-sheet ID then task ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_time_sheet_ids_with_tasks(
        &self,
        time_sheet_ids: &[i32],
    ) -> Result<Vec<TimeSheetEntry>, DbErr> {
        if time_sheet_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::TimeSheetTask::find()
            .filter(entity::time_sheet_task::Column::TimeSheetId.is_in(time_sheet_ids.to_vec()))
            .order_by_asc(entity::time_sheet_task::Column::TimeSheetId)
            .order_by_asc(entity::time_sheet_task::Column::TaskId)
            .find_also_related(entity::prelude::Task)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(entry, task)| task.map(|task| TimeSheetEntry::from_entity(entry, task)))
            .collect())
    }

    /// Overwrites duration and/or completion of an entry.
    ///
    /// # Returns
    /// - `Ok(Some(TimeSheetEntry))` - The updated entry
    /// - `Ok(None)` - The task is not attached to the time-sheet
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        time_sheet_id: i32,
        task_id: i32,
        param: UpdateEntryParam,
    ) -> Result<Option<TimeSheetEntry>, DbErr> {
        let Some((entry, Some(task))) =
            entity::prelude::TimeSheetTask::find_by_id((task_id, time_sheet_id))
                .find_also_related(entity::prelude::Task)
                .one(self.db)
                .await?
        else {
            return Ok(None);
        };

        let mut active: entity::time_sheet_task::ActiveModel = entry.into();
        if let Some(duration) = param.duration {
            active.duration = ActiveValue::Set(duration);
        }
        if let Some(completed) = param.completed {
            active.completed = ActiveValue::Set(completed);
        }
        let entry = active.update(self.db).await?;

        Ok(Some(TimeSheetEntry::from_entity(entry, task)))
    }

    pub async fn delete(&self, time_sheet_id: i32, task_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TimeSheetTask::delete_by_id((task_id, time_sheet_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_task_id(&self, task_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TimeSheetTask::delete_many()
            .filter(entity::time_sheet_task::Column::TaskId.eq(task_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_time_sheet_id(&self, time_sheet_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TimeSheetTask::delete_many()
            .filter(entity::time_sheet_task::Column::TimeSheetId.eq(time_sheet_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
