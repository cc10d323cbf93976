//! Membership role checks used by permission guards and other services.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user_group::UserGroupRepository, error::AppError, model::group::GroupRole,
};

pub struct UserGroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserGroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the role of a user in a group.
    ///
    /// # Returns
    /// - `Ok(Some(GroupRole))` - User is a member with that role
    /// - `Ok(None)` - User is not a member
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_role(&self, user_id: i32, group_id: i32) -> Result<Option<GroupRole>, AppError> {
        let membership = UserGroupRepository::new(self.db)
            .find(user_id, group_id)
            .await?;

        Ok(membership.map(|m| m.role))
    }

    pub async fn has_role(
        &self,
        user_id: i32,
        group_id: i32,
        role: GroupRole,
    ) -> Result<bool, AppError> {
        Ok(self.get_role(user_id, group_id).await? == Some(role))
    }

    pub async fn is_group_owner(&self, user_id: i32, group_id: i32) -> Result<bool, AppError> {
        self.has_role(user_id, group_id, GroupRole::Owner).await
    }

    /// Any membership counts, owners included.
    pub async fn is_group_member(&self, user_id: i32, group_id: i32) -> Result<bool, AppError> {
        Ok(self.get_role(user_id, group_id).await?.is_some())
    }
}
