/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use data::input::is_blank;
use data::records::Vehicle;
use data::vehicles::VehicleRepository;
use std::sync::Arc;

use super::crud::{CrudForm, Editable};
use super::error::ValidationErrors;

#[derive(Debug, Clone, PartialEq)]
pub enum VehicleField {
    Description(String),
    Price(f64),
}

impl Editable for Vehicle {
    type Field = VehicleField;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn apply(&mut self, field: VehicleField) {
        match field {
            VehicleField::Description(description) => self.description = description,
            VehicleField::Price(price) => self.price = price,
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require(
            "description",
            !is_blank(&self.description),
            "Description is required",
        );
        errors.require(
            "price",
            self.price > 0.0,
            "Price must be greater than zero",
        );
        errors.into_result()
    }
}

pub fn vehicle_form(repository: VehicleRepository) -> CrudForm<Vehicle> {
    CrudForm::new(Arc::new(repository))
}
