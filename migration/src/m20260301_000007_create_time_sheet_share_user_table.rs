use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;
use super::m20260301_000005_create_time_sheet_table::TimeSheet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeSheetShareUser::Table)
                    .if_not_exists()
                    .col(integer(TimeSheetShareUser::TimeSheetId))
                    .col(integer(TimeSheetShareUser::UserId))
                    .col(string(TimeSheetShareUser::AccessLevel))
                    .primary_key(
                        Index::create()
                            .name("pk_time_sheet_share_user")
                            .col(TimeSheetShareUser::TimeSheetId)
                            .col(TimeSheetShareUser::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_sheet_share_user_time_sheet_id")
                            .from(TimeSheetShareUser::Table, TimeSheetShareUser::TimeSheetId)
                            .to(TimeSheet::Table, TimeSheet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_sheet_share_user_user_id")
                            .from(TimeSheetShareUser::Table, TimeSheetShareUser::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimeSheetShareUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimeSheetShareUser {
    Table,
    TimeSheetId,
    UserId,
    AccessLevel,
}
