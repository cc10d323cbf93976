//! Group factory for creating test group entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups.
///
/// Defaults to a name of `"Group {id}"` and a unique eight character invitation code.
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    invit_code: String,
}

impl<'a> GroupFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Group {}", id),
            invit_code: format!("G{:07}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn invit_code(mut self, invit_code: impl Into<String>) -> Self {
        self.invit_code = invit_code.into();
        self
    }

    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            name: ActiveValue::Set(self.name),
            invit_code: ActiveValue::Set(self.invit_code),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db).build().await
}
