use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeSheet::Table)
                    .if_not_exists()
                    .col(pk_auto(TimeSheet::Id))
                    .col(date(TimeSheet::EntryDate))
                    .col(string_null(TimeSheet::Title))
                    .col(string_null(TimeSheet::Icon))
                    .col(date_null(TimeSheet::StartDate))
                    .col(date_null(TimeSheet::EndDate))
                    .col(string_null(TimeSheet::StartTime))
                    .col(string_null(TimeSheet::EndTime))
                    .col(integer(TimeSheet::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_sheet_user_id")
                            .from(TimeSheet::Table, TimeSheet::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_time_sheet_user_entry_date")
                    .table(TimeSheet::Table)
                    .col(TimeSheet::UserId)
                    .col(TimeSheet::EntryDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimeSheet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimeSheet {
    Table,
    Id,
    EntryDate,
    Title,
    Icon,
    StartDate,
    EndDate,
    StartTime,
    EndTime,
    UserId,
}
