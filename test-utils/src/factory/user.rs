//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// The stored password is a placeholder, not a valid Argon2 hash. Tests that log in
/// should register through the auth service instead.
///
/// # Example
///
/// ```rust,ignore
/// let admin = UserFactory::new(&db).pseudo("root").role("ADMIN").build().await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    pseudo: String,
    email: String,
    password: String,
    role: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - pseudo: `"user{id}"`
    /// - email: `"user{id}@example.com"`
    /// - role: `"USER"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            pseudo: format!("user{}", id),
            email: format!("user{}@example.com", id),
            password: "not-a-hash".to_string(),
            role: "USER".to_string(),
        }
    }

    pub fn pseudo(mut self, pseudo: impl Into<String>) -> Self {
        self.pseudo = pseudo.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            pseudo: ActiveValue::Set(self.pseudo),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            role: ActiveValue::Set(self.role),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the `ADMIN` role.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role("ADMIN").build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(user.email.ends_with("@example.com"));
        assert_eq!(user.role, "USER");

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = UserFactory::new(db)
            .pseudo("alice")
            .email("alice@example.com")
            .role("ADMIN")
            .build()
            .await?;

        assert_eq!(user.pseudo, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, "ADMIN");

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.id, user2.id);
        assert_ne!(user1.email, user2.email);

        Ok(())
    }
}
