//! Task service for business logic.
//!
//! Tasks are shared across users; a task's `repetition` doubles as its category in
//! statistics.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{task::TaskRepository, time_sheet_task::TimeSheetTaskRepository},
    error::AppError,
    model::task::{Task, TaskParam},
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: TaskParam) -> Result<Task, AppError> {
        let task = TaskRepository::new(self.db).create(param).await?;

        tracing::debug!("Created task {} ({})", task.id, task.name);

        Ok(task)
    }

    pub async fn get_all(&self) -> Result<Vec<Task>, AppError> {
        Ok(TaskRepository::new(self.db).get_all().await?)
    }

    /// Retrieves a task by ID.
    ///
    /// # Returns
    /// - `Ok(Task)` - Task found
    /// - `Err(AppError::NotFound)` - No task with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Task, AppError> {
        TaskRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))
    }

    pub async fn get_by_repetition(&self, repetition: &str) -> Result<Vec<Task>, AppError> {
        Ok(TaskRepository::new(self.db)
            .get_by_repetition(repetition)
            .await?)
    }

    /// Overwrites a task's name and repetition.
    ///
    /// # Returns
    /// - `Ok(Task)` - The updated task
    /// - `Err(AppError::BadRequest)` - No task with that ID
    pub async fn update(&self, id: i32, param: TaskParam) -> Result<Task, AppError> {
        TaskRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::BadRequest("Task not found".to_string()))
    }

    /// Deletes a task and detaches it from every time-sheet.
    ///
    /// # Returns
    /// - `Ok(())` - Task deleted
    /// - `Err(AppError::NotFound)` - No task with that ID
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let task_repo = TaskRepository::new(&txn);
        if task_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Task not found".to_string()));
        }

        TimeSheetTaskRepository::new(&txn)
            .delete_by_task_id(id)
            .await?;
        task_repo.delete(id).await?;

        txn.commit().await?;

        Ok(())
    }
}
