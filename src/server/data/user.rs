//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, lookups used by authentication, partial updates and
//! deletion with conversion between entity models and domain models at the boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User};

/// Repository providing database operations for user management.
///
/// Holds a reference to any SeaORM connection (pool or transaction) and provides
/// methods for creating, reading, updating, and deleting user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Account fields with an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            pseudo: ActiveValue::Set(param.pseudo),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address.
    ///
    /// Email is the login identifier and the subject of issued tokens.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether an account already uses the email.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an account already uses the pseudo.
    pub async fn exists_by_pseudo(&self, pseudo: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Pseudo.eq(pseudo))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all users ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets the users matching the provided IDs, unknown IDs are skipped.
    ///
    /// # Arguments
    /// - `ids` - User IDs to load
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Users found, ordered by ID (empty if `ids` is empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Updates the provided fields of a user.
    ///
    /// Re-reads the stored row and only overwrites fields set in `param`, the role is
    /// never changed through this method.
    ///
    /// # Arguments
    /// - `id` - ID of the user to update
    /// - `param` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        if let Some(pseudo) = param.pseudo {
            active.pseudo = ActiveValue::Set(pseudo);
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = param.password_hash {
            active.password = ActiveValue::Set(password_hash);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes the user row only; dependent rows are removed by the user service.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
