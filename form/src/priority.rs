/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use data::input::is_blank;
use data::records::Priority;
use data::repository::PriorityRepository;
use data::store::Store;
use std::sync::Arc;

use super::crud::{CrudForm, Editable};
use super::error::ValidationErrors;
use super::source::LocalSource;

#[derive(Debug, Clone, PartialEq)]
pub enum PriorityField {
    Description(String),
}

impl Editable for Priority {
    type Field = PriorityField;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn apply(&mut self, field: PriorityField) {
        match field {
            PriorityField::Description(description) => self.description = description,
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require(
            "description",
            !is_blank(&self.description),
            "Description is required",
        );
        errors.into_result()
    }
}

pub fn priority_form(store: &Store) -> CrudForm<Priority> {
    CrudForm::new(Arc::new(LocalSource::new(PriorityRepository::new(store))))
}
