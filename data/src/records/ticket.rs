/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::store::Record;
use chrono::NaiveDateTime;
use entity::ticket;
use sea_orm::ActiveValue::Set;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: Option<i32>,
    pub date: NaiveDateTime,
    pub priority_id: i32,
    pub client: String,
    pub subject: String,
    pub description: String,
    pub technician_id: i32,
}

impl Default for Ticket {
    fn default() -> Self {
        Self {
            id: None,
            date: chrono::Local::now().naive_local(),
            priority_id: 0,
            client: String::new(),
            subject: String::new(),
            description: String::new(),
            technician_id: 0,
        }
    }
}

impl Record for Ticket {
    type Entity = ticket::Entity;
    type ActiveModel = ticket::ActiveModel;

    const TABLE: &'static str = "ticket";

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn id_column() -> ticket::Column {
        ticket::Column::Id
    }

    fn from_model(model: ticket::Model) -> Self {
        Self {
            id: Some(model.id),
            date: model.date,
            priority_id: model.priority_id,
            client: model.client,
            subject: model.subject,
            description: model.description,
            technician_id: model.technician_id,
        }
    }

    fn into_active_model(self) -> ticket::ActiveModel {
        ticket::ActiveModel {
            id: super::id_value(self.id),
            date: Set(self.date),
            priority_id: Set(self.priority_id),
            client: Set(self.client),
            subject: Set(self.subject),
            description: Set(self.description),
            technician_id: Set(self.technician_id),
        }
    }
}
