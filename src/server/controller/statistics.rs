use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        statistics::{GroupStatisticsDto, PeriodQuery, StatisticsDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            jwt::Principal,
        },
        service::statistics::StatisticsService,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATISTICS_TAG: &str = "statistics";

/// Statistics of the requesting user over all of their time-sheets.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Summary, category breakdown and day/week/month distributions
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/statistics/user",
    tag = STATISTICS_TAG,
    responses(
        (status = 200, description = "Statistics of the requesting user", body = StatisticsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_my_statistics(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let statistics = StatisticsService::new(&state.db)
        .user_statistics(user.id)
        .await?;

    Ok((StatusCode::OK, Json(statistics.into_dto())))
}

/// Statistics of a given user.
///
/// # Access Control
/// - `SelfOrAdmin`
///
/// # Returns
/// - `200 OK` - Statistics of the user
/// - `403 Forbidden` - Requesting another user's statistics without being an admin
/// - `404 Not Found` - User not found
#[utoipa::path(
    get,
    path = "/api/statistics/user/{user_id}",
    tag = STATISTICS_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Statistics of the user", body = StatisticsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user_statistics(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let statistics = StatisticsService::new(&state.db)
        .user_statistics(user_id)
        .await?;

    Ok((StatusCode::OK, Json(statistics.into_dto())))
}

/// Statistics of the requesting user between two inclusive dates.
///
/// # Returns
/// - `200 OK` - Statistics with the daily view labeled `custom`
/// - `400 Bad Request` - Start date after end date
#[utoipa::path(
    get,
    path = "/api/statistics/period",
    tag = STATISTICS_TAG,
    params(PeriodQuery),
    responses(
        (status = 200, description = "Statistics for the period", body = StatisticsDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_my_period_statistics(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Query(period): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let statistics = StatisticsService::new(&state.db)
        .user_statistics_for_period(user.id, period.start_date, period.end_date)
        .await?;

    Ok((StatusCode::OK, Json(statistics.into_dto())))
}

/// Statistics of a given user between two inclusive dates.
#[utoipa::path(
    get,
    path = "/api/statistics/user/{user_id}/period",
    tag = STATISTICS_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        PeriodQuery
    ),
    responses(
        (status = 200, description = "Statistics for the period", body = StatisticsDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user_period_statistics(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(user_id): Path<i32>,
    Query(period): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let statistics = StatisticsService::new(&state.db)
        .user_statistics_for_period(user_id, period.start_date, period.end_date)
        .await?;

    Ok((StatusCode::OK, Json(statistics.into_dto())))
}

/// Per-member summaries of a group.
///
/// # Access Control
/// - `GroupMember`
///
/// # Returns
/// - `200 OK` - One summary per member with at least one time-sheet
/// - `403 Forbidden` - Requester is not a member
#[utoipa::path(
    get,
    path = "/api/statistics/group/{group_id}",
    tag = STATISTICS_TAG,
    params(("group_id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Group statistics", body = GroupStatisticsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto)
    ),
)]
pub async fn get_group_statistics(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::GroupMember(group_id)])
        .await?;

    let statistics = StatisticsService::new(&state.db)
        .group_statistics(group_id)
        .await?;

    Ok((StatusCode::OK, Json(statistics.into_dto())))
}
