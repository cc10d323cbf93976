//! Time-sheet factory for creating test time-sheet entities.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating time-sheets owned by a given user.
///
/// Defaults to today's date (UTC) with no title, icon or date range.
pub struct TimeSheetFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    entry_date: NaiveDate,
    title: Option<String>,
    icon: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl<'a> TimeSheetFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            entry_date: Utc::now().date_naive(),
            title: None,
            icon: None,
            start_date: None,
            end_date: None,
        }
    }

    pub fn entry_date(mut self, entry_date: NaiveDate) -> Self {
        self.entry_date = entry_date;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn range(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    pub async fn build(self) -> Result<entity::time_sheet::Model, DbErr> {
        entity::time_sheet::ActiveModel {
            entry_date: ActiveValue::Set(self.entry_date),
            title: ActiveValue::Set(self.title),
            icon: ActiveValue::Set(self.icon),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            start_time: ActiveValue::Set(None),
            end_time: ActiveValue::Set(None),
            user_id: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a time-sheet for today owned by `user_id`.
pub async fn create_time_sheet(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::time_sheet::Model, DbErr> {
    TimeSheetFactory::new(db, user_id).build().await
}
