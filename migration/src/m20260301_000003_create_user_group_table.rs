use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;
use super::m20260301_000002_create_group_table::Group;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserGroup::Table)
                    .if_not_exists()
                    .col(integer(UserGroup::UserId))
                    .col(integer(UserGroup::GroupId))
                    .col(string(UserGroup::Role))
                    .primary_key(
                        Index::create()
                            .name("pk_user_group")
                            .col(UserGroup::UserId)
                            .col(UserGroup::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_group_user_id")
                            .from(UserGroup::Table, UserGroup::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_group_group_id")
                            .from(UserGroup::Table, UserGroup::GroupId)
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
            .drop_table(Table::drop().table(UserGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserGroup {
    Table,
    UserId,
    GroupId,
    Role,
}
