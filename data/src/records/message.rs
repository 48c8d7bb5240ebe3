/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::store::Record;
use chrono::NaiveDateTime;
use entity::message;
use sea_orm::ActiveValue::Set;

pub use entity::message::SenderRole;

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Option<i32>,
    pub content: String,
    pub date: NaiveDateTime,
    pub sender_name: String,
    pub sender_role: SenderRole,
    pub ticket_id: i32,
}

impl Message {
    /// Blank message attached to `ticket_id`.
    pub fn for_ticket(ticket_id: i32) -> Self {
        Self {
            ticket_id,
            ..Self::default()
        }
    }
}

impl Default for Message {
    fn default() -> Self {
        Self {
            id: None,
            content: String::new(),
            date: chrono::Local::now().naive_local(),
            sender_name: String::new(),
            sender_role: SenderRole::default(),
            ticket_id: 0,
        }
    }
}

impl Record for Message {
    type Entity = message::Entity;
    type ActiveModel = message::ActiveModel;

    const TABLE: &'static str = "message";

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn id_column() -> message::Column {
        message::Column::Id
    }

    fn from_model(model: message::Model) -> Self {
        Self {
            id: Some(model.id),
            content: model.content,
            date: model.date,
            sender_name: model.sender_name,
            sender_role: model.sender_role,
            ticket_id: model.ticket_id,
        }
    }

    fn into_active_model(self) -> message::ActiveModel {
        message::ActiveModel {
            id: super::id_value(self.id),
            content: Set(self.content),
            date: Set(self.date),
            sender_name: Set(self.sender_name),
            sender_role: Set(self.sender_role),
            ticket_id: Set(self.ticket_id),
        }
    }
}
