//! Membership factory linking users to groups.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating membership rows. Defaults to the `MEMBER` role.
pub struct UserGroupFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    group_id: i32,
    role: String,
}

impl<'a> UserGroupFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32, group_id: i32) -> Self {
        Self {
            db,
            user_id,
            group_id,
            role: "MEMBER".to_string(),
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub async fn build(self) -> Result<entity::user_group::Model, DbErr> {
        entity::user_group::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            group_id: ActiveValue::Set(self.group_id),
            role: ActiveValue::Set(self.role),
        }
        .insert(self.db)
        .await
    }
}

/// Adds the user to the group as a `MEMBER`.
pub async fn create_user_group(
    db: &DatabaseConnection,
    user_id: i32,
    group_id: i32,
) -> Result<entity::user_group::Model, DbErr> {
    UserGroupFactory::new(db, user_id, group_id).build().await
}
