use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            jwt::Principal,
        },
        model::user::{UpdateAccountParam, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Users ordered by ID
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let users: Vec<UserDto> = UserService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(User::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Get the account of the requesting user.
///
/// # Returns
/// - `200 OK` - The authenticated user
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Authenticated user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get a user by ID.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - User found
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user account.
///
/// Absent fields are left unchanged. A new password is hashed before storage.
///
/// # Access Control
/// - `SelfOrAdmin` - Users may only update their own account unless they are admins
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `principal` - Identity from the bearer token
/// - `id` - ID of the account to update
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Updated account
/// - `400 Bad Request` - Email or pseudo already taken by another account
/// - `403 Forbidden` - Not the account owner and not an admin
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Email or pseudo already in use", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    let user = UserService::new(&state.db)
        .update(
            id,
            UpdateAccountParam {
                pseudo: payload.pseudo,
                email: payload.email,
                password: payload.password,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user account with its time-sheets, memberships, shares and invitations.
///
/// # Access Control
/// - `SelfOrAdmin`
///
/// # Returns
/// - `204 No Content` - Account deleted
/// - `403 Forbidden` - Not the account owner and not an admin
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    UserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
