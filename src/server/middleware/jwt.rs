//! Bearer token extraction.
//!
//! `attach_principal` runs on every request. A valid token yields a `Principal` in the
//! request extensions; a missing or invalid token leaves the request anonymous and the
//! endpoint's `AuthGuard` decides whether that is acceptable.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::{model::user::Role, state::AppState};

/// Identity carried by a validated token.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub id: i32,
    /// Email of the user, the token subject.
    pub username: String,
    pub role: Role,
}

/// Validates the configured bearer header and attaches the `Principal` when valid.
pub async fn attach_principal(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get(state.jwt_header.as_str())
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(state.jwt_prefix.as_str()))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    if let Some(token) = token {
        match state.tokens.validate(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(Principal {
                    id: claims.id,
                    username: claims.sub,
                    role: Role::from_stored(&claims.role),
                });
            }
            Err(e) => {
                tracing::debug!(
                    "Skipping invalid bearer token on {}: {}",
                    req.uri().path(),
                    e
                );
            }
        }
    }

    next.run(req).await
}
