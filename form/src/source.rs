/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use async_trait::async_trait;
use data::records::Vehicle;
use data::repository::LocalRepository;
use data::resource::{Resource, terminal};
use data::store::Record;
use data::vehicles::VehicleRepository;
use futures::stream::{self, BoxStream, StreamExt};
use sea_orm::{Condition, DbErr};

/// Where a form reads and writes its records. Failures arrive as
/// displayable messages.
#[async_trait]
pub trait Source<R: Send + 'static>: Send + Sync + 'static {
    /// Live listing: `Loading`, then a terminal state for every refresh.
    fn list(&self) -> BoxStream<'static, Resource<Vec<R>>>;
    async fn find(&self, id: i32) -> Result<Option<R>, String>;
    async fn save(&self, record: R) -> Result<R, String>;
    async fn delete(&self, record: R) -> Result<bool, String>;

    fn refresh(&self) {}
}

pub struct LocalSource<R> {
    repository: LocalRepository<R>,
    scope: Option<Condition>,
}

impl<R: Record> LocalSource<R> {
    pub fn new(repository: LocalRepository<R>) -> Self {
        Self {
            repository,
            scope: None,
        }
    }

    /// Only reaches rows matching `scope`.
    pub fn scoped(repository: LocalRepository<R>, scope: Condition) -> Self {
        Self {
            repository,
            scope: Some(scope),
        }
    }
}

impl<R: Record> LocalSource<R> {
    async fn find_in_scope(&self, id: i32) -> Result<Option<R>, DbErr> {
        match &self.scope {
            Some(scope) => self.repository.find_where(id, scope.clone()).await,
            None => self.repository.find(id).await,
        }
    }

    /// Whether `record` may be written through this source. Stored rows
    /// outside the scope are off limits.
    async fn in_scope(&self, record: &R) -> Result<bool, DbErr> {
        let Some(id) = record.id() else {
            return Ok(true);
        };

        if self.scope.is_none() || self.find_in_scope(id).await?.is_some() {
            return Ok(true);
        }

        Ok(self.repository.find(id).await?.is_none())
    }
}

fn store_error(e: DbErr) -> String {
    tracing::warn!(error = %e, "Local store request failed");
    e.to_string()
}

#[async_trait]
impl<R: Record> Source<R> for LocalSource<R> {
    fn list(&self) -> BoxStream<'static, Resource<Vec<R>>> {
        let watch = match &self.scope {
            Some(scope) => self.repository.watch_where(scope.clone()),
            None => self.repository.watch_all(),
        };

        stream::once(async { Resource::<Vec<R>>::Loading })
            .chain(watch.map(|result| Resource::<Vec<R>>::from(result.map_err(store_error))))
            .boxed()
    }

    async fn find(&self, id: i32) -> Result<Option<R>, String> {
        self.find_in_scope(id).await.map_err(store_error)
    }

    async fn save(&self, record: R) -> Result<R, String> {
        if !self.in_scope(&record).await.map_err(store_error)? {
            tracing::warn!(table = R::TABLE, id = ?record.id(), "Refused write outside form scope");
            return Err("Record is not part of this form".to_string());
        }

        self.repository.save(record).await.map_err(store_error)
    }

    async fn delete(&self, record: R) -> Result<bool, String> {
        if !self.in_scope(&record).await.map_err(store_error)? {
            tracing::debug!(table = R::TABLE, id = ?record.id(), "Ignored delete outside form scope");
            return Ok(false);
        }

        self.repository.delete(&record).await.map_err(store_error)
    }
}

#[async_trait]
impl Source<Vehicle> for VehicleRepository {
    fn list(&self) -> BoxStream<'static, Resource<Vec<Vehicle>>> {
        self.watch_vehicles()
    }

    async fn find(&self, id: i32) -> Result<Option<Vehicle>, String> {
        VehicleRepository::find(self, id)
            .await
            .map_err(|e| e.to_string())
    }

    async fn save(&self, record: Vehicle) -> Result<Vehicle, String> {
        let progress = match record.id {
            Some(_) => VehicleRepository::update(self, record),
            None => VehicleRepository::save(self, record),
        };

        terminal(progress).await.into_result()
    }

    async fn delete(&self, record: Vehicle) -> Result<bool, String> {
        match record.id {
            Some(id) => terminal(VehicleRepository::delete(self, id))
                .await
                .into_result()
                .map(|()| true),
            None => Ok(false),
        }
    }

    fn refresh(&self) {
        VehicleRepository::refresh(self);
    }
}
