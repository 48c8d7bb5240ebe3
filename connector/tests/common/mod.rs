/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! In-process stand-in for the vehicle API

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use connector::vehicles::VehicleRecord;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct FakeApi {
    pub vehicles: Mutex<Vec<VehicleRecord>>,
    next_id: Mutex<i32>,
    failure: Mutex<Option<(StatusCode, String)>>,
}

impl FakeApi {
    pub fn with_vehicles(vehicles: Vec<VehicleRecord>) -> Arc<Self> {
        let next_id = vehicles
            .iter()
            .filter_map(|v| v.vehicle_id)
            .max()
            .unwrap_or(0);

        Arc::new(Self {
            vehicles: Mutex::new(vehicles),
            next_id: Mutex::new(next_id),
            failure: Mutex::new(None),
        })
    }

    /// Makes every following request answer with `status` and `body`.
    pub fn fail_with(&self, status: StatusCode, body: &str) {
        *self.failure.lock().unwrap() = Some((status, body.to_string()));
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn snapshot(&self) -> Vec<VehicleRecord> {
        self.vehicles.lock().unwrap().clone()
    }

    fn failure(&self) -> Option<Response> {
        self.failure
            .lock()
            .unwrap()
            .clone()
            .map(|(status, body)| (status, body).into_response())
    }
}

pub fn vehicle(id: Option<i32>, description: &str, price: f64) -> VehicleRecord {
    VehicleRecord {
        vehicle_id: id,
        description: description.to_string(),
        price,
    }
}

async fn list(State(api): State<Arc<FakeApi>>) -> Response {
    if let Some(res) = api.failure() {
        return res;
    }

    Json(api.snapshot()).into_response()
}

async fn list_by_id(State(api): State<Arc<FakeApi>>, Path(id): Path<i32>) -> Response {
    if let Some(res) = api.failure() {
        return res;
    }

    let found: Vec<VehicleRecord> = api
        .snapshot()
        .into_iter()
        .filter(|v| v.vehicle_id == Some(id))
        .collect();

    Json(found).into_response()
}

async fn create(State(api): State<Arc<FakeApi>>, Json(mut record): Json<VehicleRecord>) -> Response {
    if let Some(res) = api.failure() {
        return res;
    }

    let id = {
        let mut next_id = api.next_id.lock().unwrap();
        *next_id += 1;
        *next_id
    };

    record.vehicle_id = Some(id);
    api.vehicles.lock().unwrap().push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn replace(
    State(api): State<Arc<FakeApi>>,
    Path(id): Path<i32>,
    Json(mut record): Json<VehicleRecord>,
) -> Response {
    if let Some(res) = api.failure() {
        return res;
    }

    let mut vehicles = api.vehicles.lock().unwrap();
    match vehicles.iter_mut().find(|v| v.vehicle_id == Some(id)) {
        Some(existing) => {
            record.vehicle_id = Some(id);
            *existing = record.clone();
            Json(record).into_response()
        }
        None => (StatusCode::NOT_FOUND, format!("Vehicle {} not found", id)).into_response(),
    }
}

async fn remove(State(api): State<Arc<FakeApi>>, Path(id): Path<i32>) -> Response {
    if let Some(res) = api.failure() {
        return res;
    }

    let mut vehicles = api.vehicles.lock().unwrap();
    let before = vehicles.len();
    vehicles.retain(|v| v.vehicle_id != Some(id));

    if vehicles.len() == before {
        StatusCode::NOT_FOUND.into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

/// Serves `api` on an ephemeral local port and returns its base url.
pub async fn serve(api: Arc<FakeApi>) -> String {
    let router = Router::new()
        .route("/api/Vehiculos", get(list).post(create))
        .route(
            "/api/Vehiculos/{id}",
            get(list_by_id).put(replace).delete(remove),
        )
        .with_state(api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}
