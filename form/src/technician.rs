/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use data::input::is_blank;
use data::records::Technician;
use data::repository::TechnicianRepository;
use data::store::Store;
use std::sync::Arc;

use super::crud::{CrudForm, Editable};
use super::error::ValidationErrors;
use super::source::LocalSource;

#[derive(Debug, Clone, PartialEq)]
pub enum TechnicianField {
    Name(String),
    Salary(f64),
}

impl Editable for Technician {
    type Field = TechnicianField;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn apply(&mut self, field: TechnicianField) {
        match field {
            TechnicianField::Name(name) => self.name = name,
            TechnicianField::Salary(salary) => self.salary = salary,
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", !is_blank(&self.name), "Name is required");
        errors.require(
            "salary",
            self.salary > 0.0,
            "Salary must be greater than zero",
        );
        errors.into_result()
    }
}

pub fn technician_form(store: &Store) -> CrudForm<Technician> {
    CrudForm::new(Arc::new(LocalSource::new(TechnicianRepository::new(store))))
}
