use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        time_sheet::{
            AccessLevel, AddTaskDto, ByDateQuery, CreateTimeSheetDto, DateRangeQuery, ShareDto,
            ShareQuery, TimeSheetDetailDto, TimeSheetDto, TimeSheetTaskDto, UpdateCompletionDto,
            UpdateDurationDto, UpdateTimeSheetDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            jwt::Principal,
        },
        model::time_sheet::{CreateTimeSheetParam, DateRange, TimeSheet, TimeSheetParam},
        service::time_sheet::TimeSheetService,
        state::AppState,
    },
};

/// Tag for grouping time-sheet endpoints in OpenAPI documentation
pub static TIME_SHEET_TAG: &str = "timesheet";

fn to_dtos(time_sheets: Vec<TimeSheet>) -> Vec<TimeSheetDto> {
    time_sheets.into_iter().map(TimeSheet::into_dto).collect()
}

/// List the requesting user's time-sheets.
///
/// Both bounds are optional and inclusive.
///
/// # Access Control
/// - Authenticated, only the requester's own time-sheets are returned
///
/// # Returns
/// - `200 OK` - Time-sheets ordered by entry date
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/timesheets",
    tag = TIME_SHEET_TAG,
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Time-sheets of the requesting user", body = Vec<TimeSheetDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_time_sheets(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let time_sheets = TimeSheetService::new(&state.db)
        .list_for_user(user.id, DateRange::new(range.start_date, range.end_date))
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(time_sheets))))
}

/// Create a time-sheet for the requesting user.
///
/// The entry date defaults to today. Listing groups in `shared_with_groups` shares
/// the new time-sheet with them at `shared_access_level` (`READ` by default).
///
/// # Access Control
/// - Authenticated, and `OWNER` of every group listed in `shared_with_groups`
///
/// # Returns
/// - `201 Created` - Created time-sheet
/// - `403 Forbidden` - Requester does not own one of the listed groups
#[utoipa::path(
    post,
    path = "/api/timesheets",
    tag = TIME_SHEET_TAG,
    request_body = CreateTimeSheetDto,
    responses(
        (status = 201, description = "Time-sheet created", body = TimeSheetDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn create_time_sheet(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Json(payload): Json<CreateTimeSheetDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let param = CreateTimeSheetParam {
        time_sheet: TimeSheetParam {
            entry_date: payload.entry_date.unwrap_or_else(TimeSheetService::today),
            title: payload.title,
            icon: payload.icon,
            start_date: payload.start_date,
            end_date: payload.end_date,
            start_time: payload.start_time,
            end_time: payload.end_time,
        },
        shared_with_groups: payload.shared_with_groups,
        shared_access_level: payload.shared_access_level.unwrap_or(AccessLevel::Read),
    };

    let time_sheet = TimeSheetService::new(&state.db).create(user.id, param).await?;

    Ok((StatusCode::CREATED, Json(time_sheet.into_dto())))
}

/// Get a time-sheet with its tasks.
///
/// # Access Control
/// - `TimeSheetView` - Owner, users and groups it is shared with, or admins
///
/// # Returns
/// - `200 OK` - Time-sheet with its task entries
/// - `403 Forbidden` - Not shared with the requester
/// - `404 Not Found` - Time-sheet not found
#[utoipa::path(
    get,
    path = "/api/timesheets/{id}",
    tag = TIME_SHEET_TAG,
    params(("id" = i32, Path, description = "Time-sheet ID")),
    responses(
        (status = 200, description = "Time-sheet found", body = TimeSheetDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Time-sheet not found", body = ErrorDto)
    ),
)]
pub async fn get_time_sheet(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::TimeSheetView(id)])
        .await?;

    let detail = TimeSheetService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Replace the editable fields of a time-sheet.
///
/// An omitted entry date keeps the stored one. The owner never changes.
///
/// # Access Control
/// - `TimeSheetEdit` - Owner, or `OWNER` of a group the time-sheet is shared with
///
/// # Returns
/// - `200 OK` - Updated time-sheet
/// - `403 Forbidden` - Requester may not edit the time-sheet
/// - `404 Not Found` - Time-sheet not found
#[utoipa::path(
    put,
    path = "/api/timesheets/{id}",
    tag = TIME_SHEET_TAG,
    params(("id" = i32, Path, description = "Time-sheet ID")),
    request_body = UpdateTimeSheetDto,
    responses(
        (status = 200, description = "Time-sheet updated", body = TimeSheetDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Time-sheet not found", body = ErrorDto)
    ),
)]
pub async fn update_time_sheet(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTimeSheetDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::TimeSheetEdit(id)])
        .await?;

    let service = TimeSheetService::new(&state.db);
    let entry_date = match payload.entry_date {
        Some(entry_date) => entry_date,
        None => service.get_by_id(id).await?.time_sheet.entry_date,
    };

    let time_sheet = service
        .update(
            id,
            TimeSheetParam {
                entry_date,
                title: payload.title,
                icon: payload.icon,
                start_date: payload.start_date,
                end_date: payload.end_date,
                start_time: payload.start_time,
                end_time: payload.end_time,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(time_sheet.into_dto())))
}

/// Delete a time-sheet with its task entries and shares.
///
/// # Access Control
/// - `TimeSheetEdit`
///
/// # Returns
/// - `204 No Content` - Time-sheet deleted
/// - `403 Forbidden` - Requester may not edit the time-sheet
/// - `404 Not Found` - Time-sheet not found
#[utoipa::path(
    delete,
    path = "/api/timesheets/{id}",
    tag = TIME_SHEET_TAG,
    params(("id" = i32, Path, description = "Time-sheet ID")),
    responses(
        (status = 204, description = "Time-sheet deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Time-sheet not found", body = ErrorDto)
    ),
)]
pub async fn delete_time_sheet(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::TimeSheetEdit(id)])
        .await?;

    TimeSheetService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the requesting user's time-sheets for one entry date.
#[utoipa::path(
    get,
    path = "/api/timesheets/by-date",
    tag = TIME_SHEET_TAG,
    params(ByDateQuery),
    responses(
        (status = 200, description = "Time-sheets of that date", body = Vec<TimeSheetDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_time_sheets_by_date(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Query(query): Query<ByDateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let time_sheets = TimeSheetService::new(&state.db)
        .get_by_date(user.id, query.date)
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(time_sheets))))
}

/// List time-sheets shared directly with the requesting user.
#[utoipa::path(
    get,
    path = "/api/timesheets/shared",
    tag = TIME_SHEET_TAG,
    responses(
        (status = 200, description = "Time-sheets shared with the requesting user", body = Vec<TimeSheetDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_shared_time_sheets(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let time_sheets = TimeSheetService::new(&state.db)
        .list_shared_with_user(user.id)
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(time_sheets))))
}

/// List time-sheets shared with a group.
///
/// # Access Control
/// - `GroupMember`
#[utoipa::path(
    get,
    path = "/api/timesheets/group/{group_id}",
    tag = TIME_SHEET_TAG,
    params(("group_id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Time-sheets shared with the group", body = Vec<TimeSheetDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_group_time_sheets(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::GroupMember(group_id)])
        .await?;

    let time_sheets = TimeSheetService::new(&state.db)
        .list_shared_with_group(group_id)
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(time_sheets))))
}

/// Attach a task to a time-sheet.
///
/// # Access Control
/// - `TimeSheetEdit`
///
/// # Returns
/// - `201 Created` - Created entry, not completed
/// - `400 Bad Request` - Unknown task, task already attached or negative duration
/// - `403 Forbidden` - Requester may not edit the time-sheet
/// - `404 Not Found` - Time-sheet not found
#[utoipa::path(
    post,
    path = "/api/timesheets/{id}/tasks",
    tag = TIME_SHEET_TAG,
    params(("id" = i32, Path, description = "Time-sheet ID")),
    request_body = AddTaskDto,
    responses(
        (status = 201, description = "Task attached", body = TimeSheetTaskDto),
        (status = 400, description = "Invalid task entry", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Time-sheet not found", body = ErrorDto)
    ),
)]
pub async fn add_task(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    Json(payload): Json<AddTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::TimeSheetEdit(id)])
        .await?;

    let entry = TimeSheetService::new(&state.db)
        .add_task_to_time_sheet(id, payload.task_id, payload.duration)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// Set the time spent on an attached task.
#[utoipa::path(
    put,
    path = "/api/timesheets/{id}/tasks/{task_id}",
    tag = TIME_SHEET_TAG,
    params(
        ("id" = i32, Path, description = "Time-sheet ID"),
        ("task_id" = i32, Path, description = "Task ID")
    ),
    request_body = UpdateDurationDto,
    responses(
        (status = 200, description = "Duration updated", body = TimeSheetTaskDto),
        (status = 400, description = "Task not attached or negative duration", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Time-sheet not found", body = ErrorDto)
    ),
)]
pub async fn update_task_duration(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path((id, task_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateDurationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::TimeSheetEdit(id)])
        .await?;

    let entry = TimeSheetService::new(&state.db)
        .update_task_duration(id, task_id, payload.duration)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Mark an attached task as completed or not.
#[utoipa::path(
    put,
    path = "/api/timesheets/{id}/tasks/{task_id}/complete",
    tag = TIME_SHEET_TAG,
    params(
        ("id" = i32, Path, description = "Time-sheet ID"),
        ("task_id" = i32, Path, description = "Task ID")
    ),
    request_body = UpdateCompletionDto,
    responses(
        (status = 200, description = "Completion updated", body = TimeSheetTaskDto),
        (status = 400, description = "Task not attached", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Time-sheet not found", body = ErrorDto)
    ),
)]
pub async fn update_task_completion(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path((id, task_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateCompletionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::TimeSheetEdit(id)])
        .await?;

    let entry = TimeSheetService::new(&state.db)
        .update_task_completion_state(id, task_id, payload.completed)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Detach a task from a time-sheet.
#[utoipa::path(
    delete,
    path = "/api/timesheets/{id}/tasks/{task_id}",
    tag = TIME_SHEET_TAG,
    params(
        ("id" = i32, Path, description = "Time-sheet ID"),
        ("task_id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task detached"),
        (status = 400, description = "Task not attached", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Time-sheet not found", body = ErrorDto)
    ),
)]
pub async fn remove_task(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path((id, task_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::TimeSheetEdit(id)])
        .await?;

    TimeSheetService::new(&state.db)
        .remove_task_from_time_sheet(id, task_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Share a time-sheet with a user.
///
/// Sharing again with the same user replaces the access level.
///
/// # Access Control
/// - `TimeSheetEdit`
///
/// # Returns
/// - `200 OK` - Created or updated share
/// - `400 Bad Request` - User not found
/// - `403 Forbidden` - Requester may not edit the time-sheet
#[utoipa::path(
    post,
    path = "/api/timesheets/{id}/share/user/{user_id}",
    tag = TIME_SHEET_TAG,
    params(
        ("id" = i32, Path, description = "Time-sheet ID"),
        ("user_id" = i32, Path, description = "User to share with"),
        ShareQuery
    ),
    responses(
        (status = 200, description = "Time-sheet shared", body = ShareDto),
        (status = 400, description = "User not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Time-sheet not found", body = ErrorDto)
    ),
)]
pub async fn share_with_user(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path((id, user_id)): Path<(i32, i32)>,
    Query(query): Query<ShareQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::TimeSheetEdit(id)])
        .await?;

    let share = TimeSheetService::new(&state.db)
        .share_with_user(id, user_id, query.access_level)
        .await?;

    Ok((StatusCode::OK, Json(share.into_dto())))
}

/// Share a time-sheet with a group.
///
/// # Access Control
/// - `TimeSheetShareWithGroup` - Owner of the time-sheet who also owns the group
///
/// # Returns
/// - `200 OK` - Created or updated share
/// - `403 Forbidden` - Requester does not own both the time-sheet and the group
/// - `404 Not Found` - Time-sheet not found
#[utoipa::path(
    post,
    path = "/api/timesheets/{id}/share/group/{group_id}",
    tag = TIME_SHEET_TAG,
    params(
        ("id" = i32, Path, description = "Time-sheet ID"),
        ("group_id" = i32, Path, description = "Group to share with"),
        ShareQuery
    ),
    responses(
        (status = 200, description = "Time-sheet shared", body = ShareDto),
        (status = 400, description = "Group not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Time-sheet not found", body = ErrorDto)
    ),
)]
pub async fn share_with_group(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path((id, group_id)): Path<(i32, i32)>,
    Query(query): Query<ShareQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::TimeSheetShareWithGroup(id, group_id)])
        .await?;

    let share = TimeSheetService::new(&state.db)
        .share_with_group(id, group_id, query.access_level)
        .await?;

    Ok((StatusCode::OK, Json(share.into_dto())))
}

/// Export the requesting user's time-sheets as CSV.
///
/// One row per task entry with the header
/// `ID,Date,Icon,UserID,TaskID,TaskName,Duration,StartDate,EndDate`.
///
/// # Returns
/// - `200 OK` - `text/csv` attachment named `timesheets.csv`
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/timesheets/export/csv",
    tag = TIME_SHEET_TAG,
    params(DateRangeQuery),
    responses(
        (status = 200, description = "CSV export", content_type = "text/csv", body = String),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn export_csv(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let csv = TimeSheetService::new(&state.db)
        .export_csv(user.id, DateRange::new(range.start_date, range.end_date))
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"timesheets.csv\"",
            ),
        ],
        csv,
    ))
}

/// Export the requesting user's time-sheets as a PDF table.
///
/// # Returns
/// - `200 OK` - `application/pdf` attachment named `timesheets.pdf`
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Rendering failed
#[utoipa::path(
    get,
    path = "/api/timesheets/export/pdf",
    tag = TIME_SHEET_TAG,
    params(DateRangeQuery),
    responses(
        (status = 200, description = "PDF export", content_type = "application/pdf", body = Vec<u8>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_pdf(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let pdf = TimeSheetService::new(&state.db)
        .export_pdf(user.id, DateRange::new(range.start_date, range.end_date))
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"timesheets.pdf\"",
            ),
        ],
        pdf,
    ))
}
