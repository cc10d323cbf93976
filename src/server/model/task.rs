//! Task domain model.
//!
//! A task is a reusable unit of work referenced from time-sheets. The optional
//! `repetition` doubles as the task's category in statistics.

use crate::model::task::TaskDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub name: String,
    pub repetition: Option<String>,
}

impl Task {
    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            name: self.name,
            repetition: self.repetition,
        }
    }

    pub fn from_entity(entity: entity::task::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            repetition: entity.repetition,
        }
    }
}

/// Parameters shared by task creation and update.
#[derive(Debug, Clone)]
pub struct TaskParam {
    pub name: String,
    pub repetition: Option<String>,
}
