//! User service for business logic.
//!
//! This module provides the `UserService` for account management: listing, lookups,
//! partial updates with uniqueness checks and deletion of an account together with
//! everything it owns.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        invitation::InvitationRepository, time_sheet::TimeSheetRepository,
        time_sheet_share::TimeSheetShareRepository, time_sheet_task::TimeSheetTaskRepository,
        user::UserRepository, user_group::UserGroupRepository,
    },
    error::AppError,
    model::user::{UpdateAccountParam, UpdateUserParam, User},
    service::auth::password,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        Ok(user_repo.get_all().await?)
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies a partial update to an account.
    ///
    /// A changed email or pseudo must not belong to another account. A new password
    /// is hashed before it is stored.
    ///
    /// # Arguments
    /// - `id` - ID of the account to update
    /// - `param` - Fields to change, `None` keeps the stored value
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::BadRequest)` - Email or pseudo already taken
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateAccountParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let existing = self.get_by_id(id).await?;

        if let Some(email) = param.email.as_deref() {
            if email != existing.email && user_repo.exists_by_email(email).await? {
                return Err(AppError::BadRequest("Email already in use".to_string()));
            }
        }
        if let Some(pseudo) = param.pseudo.as_deref() {
            if pseudo != existing.pseudo && user_repo.exists_by_pseudo(pseudo).await? {
                return Err(AppError::BadRequest("Pseudo already in use".to_string()));
            }
        }

        let password_hash = match param.password {
            Some(plain) => Some(password::hash_password(&plain)?),
            None => None,
        };

        user_repo
            .update(
                id,
                UpdateUserParam {
                    pseudo: param.pseudo,
                    email: param.email,
                    password_hash,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Deletes an account with its memberships, shares, invitations and time-sheets.
    ///
    /// Everything is removed in a single transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        if user_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let time_sheet_repo = TimeSheetRepository::new(&txn);
        let entry_repo = TimeSheetTaskRepository::new(&txn);
        let share_repo = TimeSheetShareRepository::new(&txn);

        for time_sheet in time_sheet_repo.get_by_user_id(id).await? {
            entry_repo.delete_by_time_sheet_id(time_sheet.id).await?;
            share_repo.delete_by_time_sheet_id(time_sheet.id).await?;
            time_sheet_repo.delete(time_sheet.id).await?;
        }

        share_repo.delete_user_shares_by_user_id(id).await?;
        InvitationRepository::new(&txn).delete_by_user_id(id).await?;
        UserGroupRepository::new(&txn).delete_by_user_id(id).await?;
        user_repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
