use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, TimeSheet};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(TimeSheet)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign keys after the
    /// tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for group membership operations.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Group
    /// - UserGroup
    /// - Invitation
    pub fn with_group_tables(self) -> Self {
        self.with_table(User)
            .with_table(Group)
            .with_table(UserGroup)
            .with_table(Invitation)
    }

    /// Adds every table of the schema in dependency order.
    ///
    /// Use this for service and router tests that touch time sheets, shares and
    /// statistics at once.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_all_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_group_tables()
            .with_table(Task)
            .with_table(TimeSheet)
            .with_table(TimeSheetTask)
            .with_table(TimeSheetShareUser)
            .with_table(TimeSheetShareGroup)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
