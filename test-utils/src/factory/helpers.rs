//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a group with the provided user registered as its `OWNER`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user that will own the group
///
/// # Returns
/// - `Ok((group, membership))` - Created group and the owner membership row
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_owned_by(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<(entity::group::Model, entity::user_group::Model), DbErr> {
    let group = crate::factory::group::create_group(db).await?;
    let membership = crate::factory::user_group::UserGroupFactory::new(db, user_id, group.id)
        .role("OWNER")
        .build()
        .await?;

    Ok((group, membership))
}
