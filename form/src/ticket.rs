/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use data::input::is_blank;
use data::records::{Priority, Technician, Ticket};
use data::repository::{PriorityRepository, TechnicianRepository, TicketRepository};
use data::store::Store;
use std::sync::Arc;

use super::crud::{CrudForm, Editable};
use super::error::ValidationErrors;
use super::live::LiveList;
use super::source::LocalSource;

#[derive(Debug, Clone, PartialEq)]
pub enum TicketField {
    Date(NaiveDateTime),
    PriorityId(i32),
    Client(String),
    Subject(String),
    Description(String),
    TechnicianId(i32),
}

impl Editable for Ticket {
    type Field = TicketField;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn apply(&mut self, field: TicketField) {
        match field {
            TicketField::Date(date) => self.date = date,
            TicketField::PriorityId(id) => self.priority_id = id,
            TicketField::Client(client) => self.client = client,
            TicketField::Subject(subject) => self.subject = subject,
            TicketField::Description(description) => self.description = description,
            TicketField::TechnicianId(id) => self.technician_id = id,
        }
    }

    /// Priority and technician ids are not checked against their tables.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("client", !is_blank(&self.client), "Client is required");
        errors.require("subject", !is_blank(&self.subject), "Subject is required");
        errors.require(
            "description",
            !is_blank(&self.description),
            "Description is required",
        );
        errors.into_result()
    }
}

/// Ticket form plus the lists its priority and technician pickers offer.
pub struct TicketScreen {
    pub form: CrudForm<Ticket>,
    pub priorities: LiveList<Priority>,
    pub technicians: LiveList<Technician>,
}

pub fn ticket_form(store: &Store) -> CrudForm<Ticket> {
    CrudForm::new(Arc::new(LocalSource::new(TicketRepository::new(store))))
}

pub fn ticket_screen(store: &Store) -> TicketScreen {
    TicketScreen {
        form: ticket_form(store),
        priorities: LiveList::new(&LocalSource::new(PriorityRepository::new(store))),
        technicians: LiveList::new(&LocalSource::new(TechnicianRepository::new(store))),
    }
}
