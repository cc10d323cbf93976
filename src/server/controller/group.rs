use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        group::{CreateGroupDto, GroupDto, GroupMemberDto, JoinGroupDto, UpdateGroupDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            jwt::Principal,
        },
        model::group::{Group, GroupMember},
        service::group::GroupService,
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// Create a group owned by the requesting user.
///
/// A random invitation code is generated and the requester becomes the group's
/// first `OWNER`.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `201 Created` - Group with its invitation code
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error or no free invitation code
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Group created", body = GroupDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let group = GroupService::new(&state.db)
        .create_group(payload.name, user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// List all groups.
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "All groups", body = Vec<GroupDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_groups(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let groups: Vec<GroupDto> = GroupService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(Group::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(groups)))
}

/// Get a group by ID.
///
/// # Returns
/// - `200 OK` - Group found
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No group with that ID
#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Group found", body = GroupDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let group = GroupService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Rename a group.
///
/// # Access Control
/// - `GroupOwner` - Only owners of the group can rename it
///
/// # Returns
/// - `200 OK` - Renamed group
/// - `400 Bad Request` - Group not found
/// - `403 Forbidden` - Requester does not own the group
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Group updated", body = GroupDto),
        (status = 400, description = "Group not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::GroupOwner(id)])
        .await?;

    let group = GroupService::new(&state.db)
        .update_group(id, payload.name)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete a group with its memberships, shares and invitations.
///
/// # Access Control
/// - `GroupOwner`
///
/// # Returns
/// - `204 No Content` - Group deleted
/// - `403 Forbidden` - Requester does not own the group
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::GroupOwner(id)])
        .await?;

    GroupService::new(&state.db).delete_group(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the groups a user belongs to.
#[utoipa::path(
    get,
    path = "/api/groups/user/{user_id}",
    tag = GROUP_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Groups of the user", body = Vec<GroupDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_user_groups(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let groups: Vec<GroupDto> = GroupService::new(&state.db)
        .get_by_user_id(user_id)
        .await?
        .into_iter()
        .map(Group::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(groups)))
}

/// List the members of a group with their roles.
///
/// # Access Control
/// - `GroupMember` - Only members can see who else is in the group
///
/// # Returns
/// - `200 OK` - Members with their user details
/// - `403 Forbidden` - Requester is not a member
#[utoipa::path(
    get,
    path = "/api/groups/{id}/members",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Group members", body = Vec<GroupMemberDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto)
    ),
)]
pub async fn get_group_members(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::GroupMember(id)])
        .await?;

    let members: Vec<GroupMemberDto> = GroupService::new(&state.db)
        .get_members(id)
        .await?
        .into_iter()
        .map(GroupMember::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(members)))
}

/// Join a group with its invitation code.
///
/// # Access Control
/// - Authenticated, the requester is the one joining
///
/// # Returns
/// - `200 OK` - Joined group
/// - `400 Bad Request` - Unknown code or already a member
#[utoipa::path(
    post,
    path = "/api/groups/join",
    tag = GROUP_TAG,
    request_body = JoinGroupDto,
    responses(
        (status = 200, description = "Joined group", body = GroupDto),
        (status = 400, description = "Invalid code or already a member", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn join_group(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Json(payload): Json<JoinGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let service = GroupService::new(&state.db);
    let membership = service.join_group(&payload.invit_code, user.id).await?;
    let group = service.get_by_id(membership.group_id).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Leave a group.
///
/// # Returns
/// - `204 No Content` - Membership removed
/// - `400 Bad Request` - Not a member, or the last owner of the group
#[utoipa::path(
    post,
    path = "/api/groups/{id}/leave",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 204, description = "Left group"),
        (status = 400, description = "Not a member or last owner", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn leave_group(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    GroupService::new(&state.db).leave_group(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
