//! User domain models and parameters.
//!
//! Provides the account model used by authentication and user management along with
//! the parameter types for creating and updating accounts.

use crate::model::user::UserDto;

/// Application-wide role of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Parses a stored or token role. Anything other than `ADMIN` is a regular user.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "ADMIN" => Self::Admin,
            _ => Self::User,
        }
    }
}

/// Registered account.
///
/// `password` holds the Argon2 PHC string and never leaves the server; `into_dto`
/// drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub pseudo: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            pseudo: self.pseudo,
            email: self.email,
            role: self.role.as_str().to_string(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            role: Role::from_stored(&entity.role),
            pseudo: entity.pseudo,
            email: entity.email,
            password: entity.password,
        }
    }
}

/// Parameters for inserting a new account.
///
/// `password_hash` must already be hashed by the auth service.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub pseudo: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Parameters for a partial account update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub pseudo: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// Partial account update as submitted by the client, with a plain password.
#[derive(Debug, Clone, Default)]
pub struct UpdateAccountParam {
    pub pseudo: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
