/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use data::input::is_blank;
use data::records::Message;
use data::records::message::SenderRole;
use data::repository::MessageRepository;
use data::store::Store;
use std::sync::Arc;

use super::crud::{CrudForm, Editable};
use super::error::ValidationErrors;
use super::source::LocalSource;

#[derive(Debug, Clone, PartialEq)]
pub enum MessageField {
    Content(String),
    SenderName(String),
    SenderRole(SenderRole),
}

impl Editable for Message {
    type Field = MessageField;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn apply(&mut self, field: MessageField) {
        match field {
            MessageField::Content(content) => self.content = content,
            MessageField::SenderName(name) => self.sender_name = name,
            MessageField::SenderRole(role) => self.sender_role = role,
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("content", !is_blank(&self.content), "Message is required");
        errors.require(
            "sender_name",
            !is_blank(&self.sender_name),
            "Sender name is required",
        );
        errors.into_result()
    }
}

/// Messages of `ticket_id` only. New drafts belong to that ticket.
pub fn message_form(store: &Store, ticket_id: i32) -> CrudForm<Message> {
    let source = LocalSource::scoped(
        MessageRepository::new(store),
        MessageRepository::for_ticket(ticket_id),
    );

    CrudForm::with_blank(Arc::new(source), move || Message::for_ticket(ticket_id))
}
