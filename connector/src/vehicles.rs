/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

pub const VEHICLES_ENDPOINT: &str = "Vehiculos";

/// Vehicle as it travels over the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    #[serde(rename = "vehiculoId")]
    pub vehicle_id: Option<i32>,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
}

pub async fn get_vehicles(config: &RequestConfig) -> Result<Vec<VehicleRecord>, ConnectorError> {
    let res = get_client(config, VEHICLES_ENDPOINT, RequestType::GET)
        .send()
        .await?;

    parse_response(res).await
}

/// The server answers a lookup by id with a list, not a single record.
pub async fn get_vehicle(
    config: &RequestConfig,
    id: i32,
) -> Result<Vec<VehicleRecord>, ConnectorError> {
    let res = get_client(
        config,
        &format!("{}/{}", VEHICLES_ENDPOINT, id),
        RequestType::GET,
    )
    .send()
    .await?;

    parse_response(res).await
}

pub async fn post_vehicle(
    config: &RequestConfig,
    vehicle: &VehicleRecord,
) -> Result<VehicleRecord, ConnectorError> {
    let res = get_client(config, VEHICLES_ENDPOINT, RequestType::POST)
        .json(vehicle)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn put_vehicle(
    config: &RequestConfig,
    id: i32,
    vehicle: &VehicleRecord,
) -> Result<VehicleRecord, ConnectorError> {
    let res = get_client(
        config,
        &format!("{}/{}", VEHICLES_ENDPOINT, id),
        RequestType::PUT,
    )
    .json(vehicle)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn delete_vehicle(config: &RequestConfig, id: i32) -> Result<(), ConnectorError> {
    let res = get_client(
        config,
        &format!("{}/{}", VEHICLES_ENDPOINT, id),
        RequestType::DELETE,
    )
    .send()
    .await?;

    expect_success(res).await
}
