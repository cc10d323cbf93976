use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskDto {
    pub id: i32,
    pub name: String,
    pub repetition: Option<String>,
}

/// Body for both task creation and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskFormDto {
    pub name: String,
    pub repetition: Option<String>,
}
