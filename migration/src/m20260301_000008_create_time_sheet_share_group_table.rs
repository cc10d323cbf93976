use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_group_table::Group;
use super::m20260301_000005_create_time_sheet_table::TimeSheet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeSheetShareGroup::Table)
                    .if_not_exists()
                    .col(integer(TimeSheetShareGroup::TimeSheetId))
                    .col(integer(TimeSheetShareGroup::GroupId))
                    .col(string(TimeSheetShareGroup::AccessLevel))
                    .primary_key(
                        Index::create()
                            .name("pk_time_sheet_share_group")
                            .col(TimeSheetShareGroup::TimeSheetId)
                            .col(TimeSheetShareGroup::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_sheet_share_group_time_sheet_id")
                            .from(TimeSheetShareGroup::Table, TimeSheetShareGroup::TimeSheetId)
                            .to(TimeSheet::Table, TimeSheet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_sheet_share_group_group_id")
                            .from(TimeSheetShareGroup::Table, TimeSheetShareGroup::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimeSheetShareGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimeSheetShareGroup {
    Table,
    TimeSheetId,
    GroupId,
    AccessLevel,
}
