/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use futures::stream::BoxStream;
use sea_orm::{ColumnTrait, Condition, DbErr};
use tracing::instrument;

use super::records::*;
use super::store::{Record, Store, Table};

/// Pass-through access to one local table.
#[derive(Debug)]
pub struct LocalRepository<R> {
    table: Table<R>,
}

impl<R> Clone for LocalRepository<R> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

pub type TechnicianRepository = LocalRepository<Technician>;
pub type PriorityRepository = LocalRepository<Priority>;
pub type TicketRepository = LocalRepository<Ticket>;
pub type MessageRepository = LocalRepository<Message>;

impl<R: Record> LocalRepository<R> {
    pub fn new(store: &Store) -> Self {
        Self {
            table: store.table::<R>(),
        }
    }

    #[instrument(skip_all, fields(table = R::TABLE, id = ?record.id()))]
    pub async fn save(&self, record: R) -> Result<R, DbErr> {
        let saved = self.table.upsert(record).await?;
        tracing::debug!(id = ?saved.id(), "Saved record");
        Ok(saved)
    }

    #[instrument(skip(self), fields(table = R::TABLE))]
    pub async fn find(&self, id: i32) -> Result<Option<R>, DbErr> {
        self.table.find(id).await
    }

    #[instrument(skip(self, condition), fields(table = R::TABLE))]
    pub async fn find_where(&self, id: i32, condition: Condition) -> Result<Option<R>, DbErr> {
        self.table.find_where(id, condition).await
    }

    /// Removes the stored row with the id of `record`. Records without an id
    /// are left alone.
    #[instrument(skip_all, fields(table = R::TABLE, id = ?record.id()))]
    pub async fn delete(&self, record: &R) -> Result<bool, DbErr> {
        match record.id() {
            Some(id) => self.table.delete(id).await,
            None => Ok(false),
        }
    }

    pub async fn list(&self) -> Result<Vec<R>, DbErr> {
        self.table.list(None).await
    }

    pub fn watch_all(&self) -> BoxStream<'static, Result<Vec<R>, DbErr>> {
        self.table.watch(None)
    }

    pub fn watch_where(&self, condition: Condition) -> BoxStream<'static, Result<Vec<R>, DbErr>> {
        self.table.watch(Some(condition))
    }
}

impl LocalRepository<Message> {
    pub fn for_ticket(ticket_id: i32) -> Condition {
        Condition::all().add(entity::message::Column::TicketId.eq(ticket_id))
    }

    pub fn watch_for_ticket(
        &self,
        ticket_id: i32,
    ) -> BoxStream<'static, Result<Vec<Message>, DbErr>> {
        self.watch_where(Self::for_ticket(ticket_id))
    }
}
