/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use async_stream::stream;
use futures::stream::{BoxStream, StreamExt};
use sea_orm::sea_query::{IntoValueTuple, ValueTuple};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PrimaryKeyTrait, QueryFilter, QueryOrder, Value,
};
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

use super::consts::CHANGE_FEED_CAPACITY;

type PrimaryValue<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// A value that is persisted as one row of a local table keyed by an
/// auto-increment integer id.
pub trait Record: Clone + Send + Sync + 'static {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + Send + Sync + 'static;

    const TABLE: &'static str;

    fn id(&self) -> Option<i32>;
    fn id_column() -> <Self::Entity as EntityTrait>::Column;
    fn from_model(model: <Self::Entity as EntityTrait>::Model) -> Self;
    fn into_active_model(self) -> Self::ActiveModel;
}

/// Broadcasts the name of every table that was written to.
#[derive(Debug, Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<&'static str>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
        Self { sender }
    }

    pub fn notify(&self, table: &'static str) {
        // no receivers is fine
        let _ = self.sender.send(table);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<&'static str> {
        self.sender.subscribe()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct Store {
    pub db: Arc<DatabaseConnection>,
    pub feed: ChangeFeed,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db: Arc::new(db),
            feed: ChangeFeed::new(),
        }
    }

    pub fn table<R: Record>(&self) -> Table<R> {
        Table {
            store: self.clone(),
            _record: PhantomData,
        }
    }
}

/// Key-by-id gateway over the table backing `R`.
#[derive(Debug)]
pub struct Table<R> {
    store: Store,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for Table<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> Table<R> {
    /// Inserts `record` when its id is absent or unknown, replaces the
    /// stored row otherwise. Returns the row as stored.
    pub async fn upsert(&self, record: R) -> Result<R, DbErr> {
        let db = &*self.store.db;

        let existing = match record.id() {
            Some(id) => self.find(id).await?.map(|_| id),
            None => None,
        };

        let id = match existing {
            Some(id) => {
                R::Entity::update_many()
                    .set(record.into_active_model())
                    .filter(R::id_column().eq(id))
                    .exec(db)
                    .await?;
                id
            }
            None => {
                let result = R::Entity::insert(record.into_active_model())
                    .exec(db)
                    .await?;
                key_to_id::<R::Entity>(result.last_insert_id)?
            }
        };

        self.store.feed.notify(R::TABLE);

        self.find(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("{} {}", R::TABLE, id)))
    }

    pub async fn find(&self, id: i32) -> Result<Option<R>, DbErr> {
        let model = R::Entity::find()
            .filter(R::id_column().eq(id))
            .one(&*self.store.db)
            .await?;

        Ok(model.map(R::from_model))
    }

    /// Like `find`, but only matches a row that also satisfies `condition`.
    pub async fn find_where(&self, id: i32, condition: Condition) -> Result<Option<R>, DbErr> {
        let model = R::Entity::find()
            .filter(condition.add(R::id_column().eq(id)))
            .one(&*self.store.db)
            .await?;

        Ok(model.map(R::from_model))
    }

    /// Returns whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = R::Entity::delete_many()
            .filter(R::id_column().eq(id))
            .exec(&*self.store.db)
            .await?;

        if result.rows_affected > 0 {
            self.store.feed.notify(R::TABLE);
        }

        Ok(result.rows_affected > 0)
    }

    pub async fn list(&self, condition: Option<Condition>) -> Result<Vec<R>, DbErr> {
        let mut query = R::Entity::find();

        if let Some(condition) = condition {
            query = query.filter(condition);
        }

        let models = query
            .order_by_asc(R::id_column())
            .all(&*self.store.db)
            .await?;

        Ok(models.into_iter().map(R::from_model).collect())
    }

    /// Emits the current listing, then a fresh one after every write to the
    /// table. The stream holds its own handle on the feed, so it only stops
    /// when dropped.
    pub fn watch(&self, condition: Option<Condition>) -> BoxStream<'static, Result<Vec<R>, DbErr>> {
        let table = self.clone();
        let mut changes = self.store.feed.subscribe();

        stream! {
            'watch: loop {
                yield table.list(condition.clone()).await;

                loop {
                    match changes.recv().await {
                        Ok(name) if name == R::TABLE => break,
                        Ok(_) => continue,
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::debug!(table = R::TABLE, skipped, "Change feed lagged");
                            break;
                        }
                        Err(RecvError::Closed) => break 'watch,
                    }
                }
            }
        }
        .boxed()
    }
}

fn key_to_id<E: EntityTrait>(key: PrimaryValue<E>) -> Result<i32, DbErr> {
    match key.into_value_tuple() {
        ValueTuple::One(Value::Int(Some(id))) => Ok(id),
        ValueTuple::One(Value::BigInt(Some(id))) => {
            i32::try_from(id).map_err(|e| DbErr::Custom(e.to_string()))
        }
        other => Err(DbErr::Custom(format!(
            "Unexpected primary key {:?}",
            other
        ))),
    }
}
