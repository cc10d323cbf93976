//! Task data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::task::{Task, TaskParam};

/// Repository providing database operations for tasks.
pub struct TaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: TaskParam) -> Result<Task, DbErr> {
        let entity = entity::task::ActiveModel {
            name: ActiveValue::Set(param.name),
            repetition: ActiveValue::Set(param.repetition),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Task::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Task>, DbErr> {
        let entity = entity::prelude::Task::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Task::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Task>, DbErr> {
        let entities = entity::prelude::Task::find()
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Task::from_entity).collect())
    }

    /// Gets the tasks whose repetition exactly matches `repetition`.
    pub async fn get_by_repetition(&self, repetition: &str) -> Result<Vec<Task>, DbErr> {
        let entities = entity::prelude::Task::find()
            .filter(entity::task::Column::Repetition.eq(repetition))
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Task::from_entity).collect())
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Task>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Task::find()
            .filter(entity::task::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Task::from_entity).collect())
    }

    /// Overwrites name and repetition of a task.
    ///
    /// # Returns
    /// - `Ok(Some(Task))` - The updated task
    /// - `Ok(None)` - No task with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: TaskParam) -> Result<Option<Task>, DbErr> {
        let Some(entity) = entity::prelude::Task::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::task::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.repetition = ActiveValue::Set(param.repetition);
        let entity = active.update(self.db).await?;

        Ok(Some(Task::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Task::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
