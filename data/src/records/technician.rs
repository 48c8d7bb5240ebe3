/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::store::Record;
use entity::technician;
use sea_orm::ActiveValue::Set;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Technician {
    pub id: Option<i32>,
    pub name: String,
    pub salary: f64,
}

impl Technician {
    pub fn new(name: impl Into<String>, salary: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            salary,
        }
    }
}

impl Record for Technician {
    type Entity = technician::Entity;
    type ActiveModel = technician::ActiveModel;

    const TABLE: &'static str = "technician";

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn id_column() -> technician::Column {
        technician::Column::Id
    }

    fn from_model(model: technician::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            salary: model.salary,
        }
    }

    fn into_active_model(self) -> technician::ActiveModel {
        technician::ActiveModel {
            id: super::id_value(self.id),
            name: Set(self.name),
            salary: Set(self.salary),
        }
    }
}
