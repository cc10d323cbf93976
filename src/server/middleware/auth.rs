use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        time_sheet::TimeSheetRepository, time_sheet_share::TimeSheetShareRepository,
        user::UserRepository, user_group::UserGroupRepository,
    },
    error::{auth::AuthError, AppError},
    middleware::jwt::Principal,
    model::{
        group::GroupRole,
        time_sheet::TimeSheet,
        user::{Role, User},
    },
};

pub enum Permission {
    Admin,
    /// Requester is the given user or an admin.
    SelfOrAdmin(i32),
    /// Owner, direct share, share with one of the requester's groups, or admin.
    TimeSheetView(i32),
    /// Owner, or `OWNER` of a group the time-sheet is shared with.
    TimeSheetEdit(i32),
    /// Owner of the time-sheet who also owns the target group.
    TimeSheetShareWithGroup(i32, i32),
    GroupOwner(i32),
    GroupMember(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    principal: Option<&'a Principal>,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, principal: Option<&'a Principal>) -> Self {
        Self { db, principal }
    }

    /// Resolves the requesting user and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AuthError::Unauthenticated)` - No valid token on the request
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject was deleted
    /// - `Err(AuthError::AccessDenied)` - First permission the user lacks
    /// - `Err(AppError::NotFound)` - Time-sheet referenced by a permission does not exist
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(principal) = self.principal else {
            return Err(AuthError::Unauthenticated.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_id(principal.id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(principal.id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != Role::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin operation without the ADMIN role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrAdmin(user_id) => {
                    if user.id != *user_id && user.role != Role::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User attempted to act on account {}", user_id),
                        )
                        .into());
                    }
                }
                Permission::TimeSheetView(time_sheet_id) => {
                    let time_sheet = self.time_sheet(*time_sheet_id).await?;

                    if !self.can_view(&user, &time_sheet).await? {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User attempted to view time-sheet {}", time_sheet_id),
                        )
                        .into());
                    }
                }
                Permission::TimeSheetEdit(time_sheet_id) => {
                    let time_sheet = self.time_sheet(*time_sheet_id).await?;

                    if !self.can_edit(&user, &time_sheet).await? {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User attempted to modify time-sheet {}", time_sheet_id),
                        )
                        .into());
                    }
                }
                Permission::TimeSheetShareWithGroup(time_sheet_id, group_id) => {
                    let time_sheet = self.time_sheet(*time_sheet_id).await?;

                    let owns_group = self.group_role(user.id, *group_id).await?
                        == Some(GroupRole::Owner);
                    if time_sheet.user_id != user.id || !owns_group {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!(
                                "User attempted to share time-sheet {} with group {} without owning both",
                                time_sheet_id, group_id
                            ),
                        )
                        .into());
                    }
                }
                Permission::GroupOwner(group_id) => {
                    if self.group_role(user.id, *group_id).await? != Some(GroupRole::Owner) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!(
                                "User attempted to manage group {} without owning it",
                                group_id
                            ),
                        )
                        .into());
                    }
                }
                Permission::GroupMember(group_id) => {
                    if self.group_role(user.id, *group_id).await?.is_none() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User is not a member of group {}", group_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    async fn time_sheet(&self, time_sheet_id: i32) -> Result<TimeSheet, AppError> {
        TimeSheetRepository::new(self.db)
            .find_by_id(time_sheet_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Time-sheet not found".to_string()))
    }

    async fn group_role(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<Option<GroupRole>, AppError> {
        Ok(UserGroupRepository::new(self.db)
            .find(user_id, group_id)
            .await?
            .map(|membership| membership.role))
    }

    async fn can_view(&self, user: &User, time_sheet: &TimeSheet) -> Result<bool, AppError> {
        if time_sheet.user_id == user.id || user.role == Role::Admin {
            return Ok(true);
        }

        let share_repo = TimeSheetShareRepository::new(self.db);
        if share_repo
            .get_user_shares(time_sheet.id)
            .await?
            .iter()
            .any(|share| share.target_id == user.id)
        {
            return Ok(true);
        }

        let group_ids: Vec<i32> = UserGroupRepository::new(self.db)
            .get_by_user_id(user.id)
            .await?
            .into_iter()
            .map(|membership| membership.group_id)
            .collect();

        Ok(share_repo
            .get_group_shares(time_sheet.id)
            .await?
            .iter()
            .any(|share| group_ids.contains(&share.target_id)))
    }

    async fn can_edit(&self, user: &User, time_sheet: &TimeSheet) -> Result<bool, AppError> {
        if time_sheet.user_id == user.id {
            return Ok(true);
        }

        let owned_group_ids: Vec<i32> = UserGroupRepository::new(self.db)
            .get_by_user_id(user.id)
            .await?
            .into_iter()
            .filter(|membership| membership.role == GroupRole::Owner)
            .map(|membership| membership.group_id)
            .collect();

        Ok(TimeSheetShareRepository::new(self.db)
            .get_group_shares(time_sheet.id)
            .await?
            .iter()
            .any(|share| owned_group_ids.contains(&share.target_id)))
    }
}
