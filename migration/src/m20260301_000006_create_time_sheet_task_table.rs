use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000004_create_task_table::Task;
use super::m20260301_000005_create_time_sheet_table::TimeSheet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeSheetTask::Table)
                    .if_not_exists()
                    .col(integer(TimeSheetTask::TaskId))
                    .col(integer(TimeSheetTask::TimeSheetId))
                    .col(integer(TimeSheetTask::Duration).default(0))
                    .col(boolean(TimeSheetTask::Completed).default(false))
                    .primary_key(
                        Index::create()
                            .name("pk_time_sheet_task")
                            .col(TimeSheetTask::TaskId)
                            .col(TimeSheetTask::TimeSheetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_sheet_task_task_id")
                            .from(TimeSheetTask::Table, TimeSheetTask::TaskId)
                            .to(Task::Table, Task::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_sheet_task_time_sheet_id")
                            .from(TimeSheetTask::Table, TimeSheetTask::TimeSheetId)
                            .to(TimeSheet::Table, TimeSheet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimeSheetTask::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimeSheetTask {
    Table,
    TaskId,
    TimeSheetId,
    Duration,
    Completed,
}
