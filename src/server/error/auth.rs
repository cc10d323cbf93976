use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No valid bearer token was attached to the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a valid bearer token")]
    Unauthenticated,

    /// The token was valid but its subject no longer exists.
    ///
    /// Treated the same as a missing token so deleted accounts cannot keep using
    /// a token issued before deletion.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks permission for the requested operation.
    ///
    /// Results in a 403 Forbidden response. The reason is only logged.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Description of the denied operation
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Login failed because of an unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A token submitted for refresh failed validation.
    #[error("Invalid or expired token")]
    InvalidToken,
}

/// Converts authentication errors into HTTP responses.
///
/// - `Unauthenticated` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden with a generic message
/// - `InvalidCredentials` / `InvalidToken` → 400 Bad Request
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Access denied".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials | Self::InvalidToken => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
