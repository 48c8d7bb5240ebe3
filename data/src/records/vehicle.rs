/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use connector::vehicles::VehicleRecord;

/// Vehicle kept by the remote inventory service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vehicle {
    pub id: Option<i32>,
    pub description: String,
    pub price: f64,
}

impl Vehicle {
    pub fn new(description: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            description: description.into(),
            price,
        }
    }
}

impl From<VehicleRecord> for Vehicle {
    fn from(record: VehicleRecord) -> Self {
        Self {
            id: record.vehicle_id,
            description: record.description,
            price: record.price,
        }
    }
}

impl From<Vehicle> for VehicleRecord {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            vehicle_id: vehicle.id,
            description: vehicle.description,
            price: vehicle.price,
        }
    }
}
