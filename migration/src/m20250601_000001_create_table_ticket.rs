/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// No foreign keys on priority_id / technician_id: tickets may reference
// rows that were deleted or never existed.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ticket::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ticket::Date).date_time().not_null())
                    .col(ColumnDef::new(Ticket::PriorityId).integer().not_null())
                    .col(ColumnDef::new(Ticket::Client).string().not_null())
                    .col(ColumnDef::new(Ticket::Subject).string().not_null())
                    .col(ColumnDef::new(Ticket::Description).text().not_null())
                    .col(ColumnDef::new(Ticket::TechnicianId).integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ticket {
    Table,
    Id,
    Date,
    PriorityId,
    Client,
    Subject,
    Description,
    TechnicianId,
}
