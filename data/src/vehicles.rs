/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use async_stream::stream;
use connector::vehicles::*;
use connector::{ConnectorError, RequestConfig};
use futures::stream::{BoxStream, StreamExt};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

use super::consts::{CHANGE_FEED_CAPACITY, VEHICLE_NOT_FOUND};
use super::records::Vehicle;
use super::resource::{Resource, failure};

/// Remote vehicle inventory. Every call reports its progress as a
/// `Resource` stream.
#[derive(Debug, Clone)]
pub struct VehicleRepository {
    config: RequestConfig,
    refresh: broadcast::Sender<()>,
}

impl VehicleRepository {
    pub fn new(config: RequestConfig) -> Self {
        let (refresh, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
        Self { config, refresh }
    }

    pub fn from_url(api_url: &str) -> Self {
        Self::new(RequestConfig::new(api_url))
    }

    pub fn vehicles(&self) -> BoxStream<'static, Resource<Vec<Vehicle>>> {
        let config = self.config.clone();

        stream! {
            yield Resource::Loading;

            match get_vehicles(&config).await {
                Ok(records) => yield Resource::Success(records.into_iter().map(Vehicle::from).collect()),
                Err(e) => yield failure(e),
            }
        }
        .boxed()
    }

    pub fn vehicle(&self, id: i32) -> BoxStream<'static, Resource<Vehicle>> {
        let repository = self.clone();

        stream! {
            yield Resource::Loading;

            match repository.find(id).await {
                Ok(Some(vehicle)) => yield Resource::Success(vehicle),
                Ok(None) => yield Resource::Error(VEHICLE_NOT_FOUND.to_string()),
                Err(e) => yield failure(e),
            }
        }
        .boxed()
    }

    /// First record of the by-id listing, if any.
    pub async fn find(&self, id: i32) -> Result<Option<Vehicle>, ConnectorError> {
        let records = get_vehicle(&self.config, id).await?;
        Ok(records.into_iter().next().map(Vehicle::from))
    }

    pub fn save(&self, vehicle: Vehicle) -> BoxStream<'static, Resource<Vehicle>> {
        let repository = self.clone();

        stream! {
            yield Resource::Loading;

            let record = VehicleRecord::from(vehicle);
            match post_vehicle(&repository.config, &record).await {
                Ok(created) => {
                    repository.refresh();
                    yield Resource::Success(Vehicle::from(created));
                }
                Err(e) => yield failure(e),
            }
        }
        .boxed()
    }

    pub fn update(&self, vehicle: Vehicle) -> BoxStream<'static, Resource<Vehicle>> {
        let repository = self.clone();

        stream! {
            yield Resource::Loading;

            match vehicle.id {
                Some(id) => {
                    let record = VehicleRecord::from(vehicle);
                    match put_vehicle(&repository.config, id, &record).await {
                        Ok(updated) => {
                            repository.refresh();
                            yield Resource::Success(Vehicle::from(updated));
                        }
                        Err(e) => yield failure(e),
                    }
                }
                None => yield Resource::Error("Vehicle has no id".to_string()),
            }
        }
        .boxed()
    }

    pub fn delete(&self, id: i32) -> BoxStream<'static, Resource<()>> {
        let repository = self.clone();

        stream! {
            yield Resource::Loading;

            match delete_vehicle(&repository.config, id).await {
                Ok(()) => {
                    repository.refresh();
                    yield Resource::Success(());
                }
                Err(e) => yield failure(e),
            }
        }
        .boxed()
    }

    /// Asks every `watch_vehicles` subscriber to fetch the list again.
    pub fn refresh(&self) {
        let _ = self.refresh.send(());
    }

    /// Runs `vehicles()` now and again after every successful write or
    /// `refresh()`. Never ends on its own; drop it to stop.
    pub fn watch_vehicles(&self) -> BoxStream<'static, Resource<Vec<Vehicle>>> {
        let repository = self.clone();
        let mut refreshes = self.refresh.subscribe();

        stream! {
            'watch: loop {
                let mut listing = repository.vehicles();
                while let Some(item) = listing.next().await {
                    yield item;
                }

                match refreshes.recv().await {
                    Ok(()) | Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break 'watch,
                }
            }
        }
        .boxed()
    }
}
