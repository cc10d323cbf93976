//! Group data repository for database operations.
//!
//! Provides the `GroupRepository` for managing groups and looking them up by their
//! invitation code or by member.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::group::{CreateGroupParam, Group};

/// Repository providing database operations for groups.
pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new group.
    ///
    /// # Arguments
    /// - `param` - Group name and the generated invitation code
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group
    /// - `Err(DbErr)` - Database error, including a unique violation on the code
    pub async fn create(&self, param: CreateGroupParam) -> Result<Group, DbErr> {
        let entity = entity::group::ActiveModel {
            name: ActiveValue::Set(param.name),
            invit_code: ActiveValue::Set(param.invit_code),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Finds a group by its invitation code (exact match).
    pub async fn find_by_invit_code(&self, invit_code: &str) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find()
            .filter(entity::group::Column::InvitCode.eq(invit_code))
            .one(self.db)
            .await?;

        Ok(entity.map(Group::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    /// Gets every group the user is a member of, whatever the membership role.
    ///
    /// # Arguments
    /// - `user_id` - ID of the member
    ///
    /// # Returns
    /// - `Ok(Vec<Group>)` - Groups ordered by ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::Group::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::group::Relation::UserGroup.def(),
            )
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    /// Renames a group.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - The renamed group
    /// - `Ok(None)` - No group with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, name: String) -> Result<Option<Group>, DbErr> {
        let Some(entity) = entity::prelude::Group::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::group::ActiveModel = entity.into();
        active.name = ActiveValue::Set(name);
        let entity = active.update(self.db).await?;

        Ok(Some(Group::from_entity(entity)))
    }

    /// Deletes the group row. Memberships, shares and invitations must be removed first.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Group::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts the members of a group, owners included.
    pub async fn count_members(&self, group_id: i32) -> Result<u64, DbErr> {
        entity::prelude::UserGroup::find()
            .filter(entity::user_group::Column::GroupId.eq(group_id))
            .count(self.db)
            .await
    }
}
