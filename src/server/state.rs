//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token service for signing and validating JWTs
//! - Header name and prefix the bearer token is read from

use sea_orm::DatabaseConnection;

use super::service::auth::token::TokenService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds the encoded signing keys
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs tokens on login and validates them on every request.
    pub tokens: TokenService,

    /// Request header carrying the token, `Authorization` by default.
    pub jwt_header: String,

    /// Prefix stripped from the header value before validation, `Bearer ` by default.
    pub jwt_prefix: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the signing secret
    /// - `jwt_header` - Header name the token is read from
    /// - `jwt_prefix` - Prefix preceding the token in the header value
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        jwt_header: String,
        jwt_prefix: String,
    ) -> Self {
        Self {
            db,
            tokens,
            jwt_header,
            jwt_prefix,
        }
    }
}
