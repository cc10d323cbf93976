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
                    .table(Invitation::Table)
                    .if_not_exists()
                    .col(pk_auto(Invitation::Id))
                    .col(string(Invitation::Status).default("PENDING"))
                    .col(timestamp_with_time_zone(Invitation::CreatedAt))
                    .col(timestamp_with_time_zone_null(Invitation::AcceptedAt))
                    .col(integer(Invitation::SenderId))
                    .col(integer(Invitation::RecipientId))
                    .col(integer(Invitation::GroupId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitation_sender_id")
                            .from(Invitation::Table, Invitation::SenderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitation_recipient_id")
                            .from(Invitation::Table, Invitation::RecipientId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitation_group_id")
                            .from(Invitation::Table, Invitation::GroupId)
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
            .drop_table(Table::drop().table(Invitation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invitation {
    Table,
    Id,
    Status,
    CreatedAt,
    AcceptedAt,
    SenderId,
    RecipientId,
    GroupId,
}
