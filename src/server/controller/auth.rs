use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthResponseDto, LoginDto, RegisterDto, TokenDto},
    },
    server::{
        error::AppError, model::auth::RegisterParam, service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a user with the `USER` role and returns it together with a token so the
/// client is logged in right away.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection and token service
/// - `payload` - Pseudo, email and plain password
///
/// # Returns
/// - `201 Created` - Account created, response carries a token
/// - `400 Bad Request` - Email or pseudo already in use
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Email or pseudo already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db, &state.tokens)
        .register(RegisterParam {
            pseudo: payload.pseudo,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}

/// Log in with email and password.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Credentials valid, response carries a token
/// - `400 Bad Request` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}

/// Exchange a valid token for a new one with a fresh expiration.
///
/// # Access Control
/// - Public, the submitted token is the credential
///
/// # Returns
/// - `200 OK` - New token issued
/// - `400 Bad Request` - Token invalid, expired or its user no longer exists
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    request_body = TokenDto,
    responses(
        (status = 200, description = "Token refreshed", body = AuthResponseDto),
        (status = 400, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<TokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db, &state.tokens)
        .refresh(&payload.token)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}
