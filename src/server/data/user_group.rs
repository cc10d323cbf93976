//! Membership data repository.
//!
//! Provides the `UserGroupRepository` for the `user_group` join table whose composite
//! primary key `(user_id, group_id)` guarantees a single membership per pair.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    group::{GroupMember, GroupRole, Membership},
    user::User,
};

/// Repository providing database operations for group memberships.
pub struct UserGroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserGroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a membership.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The created membership
    /// - `Err(DbErr)` - Database error, including a primary key violation when the user
    ///   is already a member
    pub async fn create(
        &self,
        user_id: i32,
        group_id: i32,
        role: GroupRole,
    ) -> Result<Membership, DbErr> {
        let entity = entity::user_group::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(group_id),
            role: ActiveValue::Set(role.as_str().to_string()),
        }
        .insert(self.db)
        .await?;

        Ok(Membership::from_entity(entity))
    }

    pub async fn find(&self, user_id: i32, group_id: i32) -> Result<Option<Membership>, DbErr> {
        let entity = entity::prelude::UserGroup::find_by_id((user_id, group_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Membership::from_entity))
    }

    /// Gets the members of a group with their accounts loaded in a single joined query.
    ///
    /// # Returns
    /// - `Ok(Vec<GroupMember>)` - Members ordered by user ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_group_id_with_users(
        &self,
        group_id: i32,
    ) -> Result<Vec<GroupMember>, DbErr> {
        let rows = entity::prelude::UserGroup::find()
            .filter(entity::user_group::Column::GroupId.eq(group_id))
            .order_by_asc(entity::user_group::Column::UserId)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(membership, user)| {
                user.map(|user| GroupMember {
                    user: User::from_entity(user),
                    role: GroupRole::from_stored(&membership.role),
                })
            })
            .collect())
    }

    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Membership>, DbErr> {
        let entities = entity::prelude::UserGroup::find()
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_group::Column::GroupId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Membership::from_entity).collect())
    }

    /// Counts the members of a group holding `role`.
    pub async fn count_by_role(&self, group_id: i32, role: GroupRole) -> Result<u64, DbErr> {
        entity::prelude::UserGroup::find()
            .filter(entity::user_group::Column::GroupId.eq(group_id))
            .filter(entity::user_group::Column::Role.eq(role.as_str()))
            .count(self.db)
            .await
    }

    /// Removes every membership of a group, returning the number of rows deleted.
    pub async fn delete_by_group_id(&self, group_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserGroup::delete_many()
            .filter(entity::user_group::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every membership of a user.
    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserGroup::delete_many()
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserGroup::delete_by_id((user_id, group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
