/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250520_000001_create_table_technician;
mod m20250520_000002_create_table_priority;
mod m20250601_000001_create_table_ticket;
mod m20250615_000001_create_table_message;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250520_000001_create_table_technician::Migration),
            Box::new(m20250520_000002_create_table_priority::Migration),
            Box::new(m20250601_000001_create_table_ticket::Migration),
            Box::new(m20250615_000001_create_table_message::Migration),
        ]
    }
}
