//! Group service for business logic.
//!
//! Groups are created with a random invitation code that other users submit to join.
//! Creation, joining, leaving and deletion each run in a single transaction so a
//! group never exists without its owner and memberships never outlive their group.

use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        group::GroupRepository, invitation::InvitationRepository,
        time_sheet_share::TimeSheetShareRepository, user_group::UserGroupRepository,
    },
    error::AppError,
    model::group::{CreateGroupParam, Group, GroupMember, GroupRole, Membership},
};

/// Length of generated invitation codes.
const INVIT_CODE_LENGTH: usize = 8;

/// Attempts at finding an unused invitation code before giving up.
const INVIT_CODE_ATTEMPTS: usize = 5;

/// Service providing business logic for groups and their memberships.
pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    /// Creates a new GroupService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GroupService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group owned by `owner_id`.
    ///
    /// Generates an unused 8-character invitation code, inserts the group and registers
    /// the owner as `OWNER` in one transaction.
    ///
    /// # Arguments
    /// - `name` - Display name of the group
    /// - `owner_id` - ID of the creating user
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group with its invitation code
    /// - `Err(AppError::InternalError)` - No unused code found after several attempts
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn create_group(&self, name: String, owner_id: i32) -> Result<Group, AppError> {
        let txn = self.db.begin().await?;
        let group_repo = GroupRepository::new(&txn);

        let mut invit_code = None;
        for _ in 0..INVIT_CODE_ATTEMPTS {
            let candidate = Self::generate_invit_code();
            if group_repo.find_by_invit_code(&candidate).await?.is_none() {
                invit_code = Some(candidate);
                break;
            }
        }
        let Some(invit_code) = invit_code else {
            return Err(AppError::InternalError(
                "Failed to generate an unused invitation code".to_string(),
            ));
        };

        let group = group_repo.create(CreateGroupParam { name, invit_code }).await?;
        UserGroupRepository::new(&txn)
            .create(owner_id, group.id, GroupRole::Owner)
            .await?;

        txn.commit().await?;

        tracing::info!("User {} created group {} ({})", owner_id, group.id, group.name);

        Ok(group)
    }

    /// Adds a user to the group identified by an invitation code.
    ///
    /// # Arguments
    /// - `invit_code` - Code shared by a group member
    /// - `user_id` - ID of the joining user
    ///
    /// # Returns
    /// - `Ok(Membership)` - The new `MEMBER` membership
    /// - `Err(AppError::BadRequest)` - Unknown code or user already a member
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn join_group(&self, invit_code: &str, user_id: i32) -> Result<Membership, AppError> {
        let txn = self.db.begin().await?;

        let group = GroupRepository::new(&txn)
            .find_by_invit_code(invit_code)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid invitation code".to_string()))?;

        let membership_repo = UserGroupRepository::new(&txn);
        if membership_repo.find(user_id, group.id).await?.is_some() {
            return Err(AppError::BadRequest(
                "User is already a member of this group".to_string(),
            ));
        }

        let membership = membership_repo
            .create(user_id, group.id, GroupRole::Member)
            .await?;

        txn.commit().await?;

        tracing::info!("User {} joined group {}", user_id, group.id);

        Ok(membership)
    }

    /// Deletes a group with its memberships, shares and invitations.
    ///
    /// # Returns
    /// - `Ok(())` - Group deleted
    /// - `Err(AppError::NotFound)` - No group with that ID
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn delete_group(&self, group_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let group_repo = GroupRepository::new(&txn);
        if group_repo.find_by_id(group_id).await?.is_none() {
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        UserGroupRepository::new(&txn)
            .delete_by_group_id(group_id)
            .await?;
        TimeSheetShareRepository::new(&txn)
            .delete_group_shares_by_group_id(group_id)
            .await?;
        InvitationRepository::new(&txn)
            .delete_by_group_id(group_id)
            .await?;
        group_repo.delete(group_id).await?;

        txn.commit().await?;

        tracing::info!("Deleted group {}", group_id);

        Ok(())
    }

    /// Renames a group.
    ///
    /// # Returns
    /// - `Ok(Group)` - The renamed group
    /// - `Err(AppError::BadRequest)` - No group with that ID
    pub async fn update_group(&self, group_id: i32, name: String) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .update(group_id, name)
            .await?
            .ok_or_else(|| AppError::BadRequest("Group not found".to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Group>, AppError> {
        Ok(GroupRepository::new(self.db).get_all().await?)
    }

    /// Retrieves a group by ID.
    ///
    /// # Returns
    /// - `Ok(Group)` - Group found
    /// - `Err(AppError::NotFound)` - No group with that ID
    pub async fn get_by_id(&self, group_id: i32) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))
    }

    /// Gets the groups a user is a member of, whatever the role.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Group>, AppError> {
        Ok(GroupRepository::new(self.db).get_by_user_id(user_id).await?)
    }

    /// Gets the members of a group with their accounts.
    ///
    /// # Returns
    /// - `Ok(Vec<GroupMember>)` - Members ordered by user ID
    /// - `Err(AppError::NotFound)` - No group with that ID
    pub async fn get_members(&self, group_id: i32) -> Result<Vec<GroupMember>, AppError> {
        self.get_by_id(group_id).await?;

        Ok(UserGroupRepository::new(self.db)
            .get_by_group_id_with_users(group_id)
            .await?)
    }

    /// Removes a user from a group.
    ///
    /// The last `OWNER` of a group cannot leave it; the group must be deleted instead.
    ///
    /// # Returns
    /// - `Ok(())` - Membership removed
    /// - `Err(AppError::BadRequest)` - User is not a member or is the last owner
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn leave_group(&self, group_id: i32, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let membership_repo = UserGroupRepository::new(&txn);

        let membership = membership_repo
            .find(user_id, group_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("User is not a member of this group".to_string()))?;

        if membership.role == GroupRole::Owner
            && membership_repo.count_by_role(group_id, GroupRole::Owner).await? <= 1
        {
            return Err(AppError::BadRequest(
                "The last owner cannot leave the group".to_string(),
            ));
        }

        membership_repo.delete(user_id, group_id).await?;

        txn.commit().await?;

        tracing::info!("User {} left group {}", user_id, group_id);

        Ok(())
    }

    /// Generates a random invitation code of uppercase letters and digits.
    fn generate_invit_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

        let mut rng = rand::rng();

        (0..INVIT_CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}
