/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::store::Record;
use entity::priority;
use sea_orm::ActiveValue::Set;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Priority {
    pub id: Option<i32>,
    pub description: String,
}

impl Priority {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: description.into(),
        }
    }
}

impl Record for Priority {
    type Entity = priority::Entity;
    type ActiveModel = priority::ActiveModel;

    const TABLE: &'static str = "priority";

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn id_column() -> priority::Column {
        priority::Column::Id
    }

    fn from_model(model: priority::Model) -> Self {
        Self {
            id: Some(model.id),
            description: model.description,
        }
    }

    fn into_active_model(self) -> priority::ActiveModel {
        priority::ActiveModel {
            id: super::id_value(self.id),
            description: Set(self.description),
        }
    }
}
