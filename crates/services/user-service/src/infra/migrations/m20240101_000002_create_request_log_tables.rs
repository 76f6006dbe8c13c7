//! Migration: Create hello request log and access log tables.
//!
//! Both reference `users.id` without ON DELETE CASCADE; the user service
//! removes log rows before the user row.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HelloRequestLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HelloRequestLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HelloRequestLogs::UserId).integer().null())
                    .col(ColumnDef::new(HelloRequestLogs::UserAgent).string().null())
                    .col(ColumnDef::new(HelloRequestLogs::IpAddress).string().null())
                    .col(
                        ColumnDef::new(HelloRequestLogs::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hello_request_logs_user_id")
                            .from(HelloRequestLogs::Table, HelloRequestLogs::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hello_request_logs_user_id")
                    .table(HelloRequestLogs::Table)
                    .col(HelloRequestLogs::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccessLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AccessLogs::UserId).integer().not_null())
                    .col(ColumnDef::new(AccessLogs::Path).string().not_null())
                    .col(
                        ColumnDef::new(AccessLogs::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_access_logs_user_id")
                            .from(AccessLogs::Table, AccessLogs::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_access_logs_user_id")
                    .table(AccessLogs::Table)
                    .col(AccessLogs::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessLogs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(HelloRequestLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HelloRequestLogs {
    Table,
    Id,
    UserId,
    UserAgent,
    IpAddress,
    Timestamp,
}

#[derive(DeriveIden)]
enum AccessLogs {
    Table,
    Id,
    UserId,
    Path,
    Timestamp,
}
