//! Authentication parameters and results.

use crate::{model::auth::AuthResponseDto, server::model::user::User};

/// Plain registration input, the password is hashed by the auth service.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub pseudo: String,
    pub email: String,
    pub password: String,
}

/// Authenticated user together with a freshly issued token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

impl AuthSession {
    pub fn into_dto(self) -> AuthResponseDto {
        AuthResponseDto {
            id: self.user.id,
            pseudo: self.user.pseudo,
            email: self.user.email,
            role: self.user.role.as_str().to_string(),
            token: self.token,
        }
    }
}
