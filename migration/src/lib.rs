pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_group_table;
mod m20260301_000003_create_user_group_table;
mod m20260301_000004_create_task_table;
mod m20260301_000005_create_time_sheet_table;
mod m20260301_000006_create_time_sheet_task_table;
mod m20260301_000007_create_time_sheet_share_user_table;
mod m20260301_000008_create_time_sheet_share_group_table;
mod m20260302_000009_create_invitation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_group_table::Migration),
            Box::new(m20260301_000003_create_user_group_table::Migration),
            Box::new(m20260301_000004_create_task_table::Migration),
            Box::new(m20260301_000005_create_time_sheet_table::Migration),
            Box::new(m20260301_000006_create_time_sheet_task_table::Migration),
            Box::new(m20260301_000007_create_time_sheet_share_user_table::Migration),
            Box::new(m20260301_000008_create_time_sheet_share_group_table::Migration),
            Box::new(m20260302_000009_create_invitation_table::Migration),
        ]
    }
}
