use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub pseudo: String,
    pub email: String,
    pub role: String,
}

/// Partial update of a user account, absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub pseudo: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
