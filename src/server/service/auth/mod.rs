//! Account registration, login and token refresh.
//!
//! Passwords are hashed with Argon2id (see `password`) and sessions are stateless
//! HS256 tokens (see `token`). Bad credentials are never surfaced as database or
//! hashing errors, `authenticate` simply returns `None`.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::{AuthSession, RegisterParam},
        user::{CreateUserParam, Role, User},
    },
    service::auth::token::TokenService,
};

/// Service handling credential checks and token issuance.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service used to sign issued tokens
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account with the `USER` role and signs it in.
    ///
    /// # Arguments
    /// - `param` - Pseudo, email and plain password
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Created user with a fresh token
    /// - `Err(AppError::BadRequest)` - Email or pseudo already taken
    /// - `Err(AppError::PasswordHashErr)` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, param: RegisterParam) -> Result<AuthSession, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.exists_by_email(&param.email).await? {
            return Err(AppError::BadRequest("Email already in use".to_string()));
        }
        if user_repo.exists_by_pseudo(&param.pseudo).await? {
            return Err(AppError::BadRequest("Pseudo already in use".to_string()));
        }

        let password_hash = password::hash_password(&param.password)?;
        let user = user_repo
            .create(CreateUserParam {
                pseudo: param.pseudo,
                email: param.email,
                password_hash,
                role: Role::User,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.pseudo);

        let token = self.tokens.issue(&user)?;

        Ok(AuthSession { user, token })
    }

    /// Checks an email and password pair.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Credentials are valid
    /// - `Ok(None)` - Unknown email or wrong password
    /// - `Err(AppError::PasswordHashErr)` - Stored hash could not be parsed
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Ok(None);
        };

        if !password::verify_password(password, &user.password)? {
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Signs a user in with email and password.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - User with a fresh token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let user = self
            .authenticate(email, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let token = self.tokens.issue(&user)?;

        Ok(AuthSession { user, token })
    }

    /// Exchanges a still valid token for a new one with a fresh expiration.
    ///
    /// The user is re-read by the token subject so role changes are picked up.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - User with a new token
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token invalid, expired or its user is gone
    pub async fn refresh(&self, token: &str) -> Result<AuthSession, AppError> {
        let claims = self.tokens.validate(token).map_err(|e| {
            tracing::debug!("Refusing to refresh token: {}", e);
            AuthError::InvalidToken
        })?;

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        let token = self.tokens.issue(&user)?;

        Ok(AuthSession { user, token })
    }
}
