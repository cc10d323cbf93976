use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        task::{TaskDto, TaskFormDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, jwt::Principal},
        model::task::{Task, TaskParam},
        service::task::TaskService,
        state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

/// Create a task.
///
/// Tasks are shared by all users; `repetition` doubles as the task's category in
/// statistics.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `201 Created` - Created task
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = TASK_TAG,
    request_body = TaskFormDto,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Json(payload): Json<TaskFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let task = TaskService::new(&state.db)
        .create(TaskParam {
            name: payload.name,
            repetition: payload.repetition,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = TASK_TAG,
    responses(
        (status = 200, description = "All tasks", body = Vec<TaskDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let tasks: Vec<TaskDto> = TaskService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(Task::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(tasks)))
}

#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task found", body = TaskDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto)
    ),
)]
pub async fn get_task(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let task = TaskService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// List tasks with the given repetition.
#[utoipa::path(
    get,
    path = "/api/tasks/repetition/{repetition}",
    tag = TASK_TAG,
    params(("repetition" = String, Path, description = "Repetition, e.g. DAILY")),
    responses(
        (status = 200, description = "Matching tasks", body = Vec<TaskDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_tasks_by_repetition(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(repetition): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let tasks: Vec<TaskDto> = TaskService::new(&state.db)
        .get_by_repetition(&repetition)
        .await?
        .into_iter()
        .map(Task::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(tasks)))
}

/// Update a task's name and repetition.
///
/// # Returns
/// - `200 OK` - Updated task
/// - `400 Bad Request` - Task not found
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    request_body = TaskFormDto,
    responses(
        (status = 200, description = "Task updated", body = TaskDto),
        (status = 400, description = "Task not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    Json(payload): Json<TaskFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let task = TaskService::new(&state.db)
        .update(
            id,
            TaskParam {
                name: payload.name,
                repetition: payload.repetition,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Delete a task and detach it from every time-sheet.
///
/// # Returns
/// - `204 No Content` - Task deleted
/// - `404 Not Found` - Task not found
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    TaskService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
