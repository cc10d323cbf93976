//! Task factory for creating test task entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating tasks. Defaults to `"Task {id}"` with no repetition.
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    repetition: Option<String>,
}

impl<'a> TaskFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Task {}", next_id()),
            repetition: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn repetition(mut self, repetition: impl Into<String>) -> Self {
        self.repetition = Some(repetition.into());
        self
    }

    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        entity::task::ActiveModel {
            name: ActiveValue::Set(self.name),
            repetition: ActiveValue::Set(self.repetition),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a task with default values.
pub async fn create_task(db: &DatabaseConnection) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db).build().await
}
