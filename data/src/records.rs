/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod message;
pub mod priority;
pub mod technician;
pub mod ticket;
pub mod vehicle;

pub use message::{Message, SenderRole};
pub use priority::Priority;
pub use technician::Technician;
pub use ticket::Ticket;
pub use vehicle::Vehicle;

use sea_orm::ActiveValue::{self, NotSet, Set};

/// Leaves the id to the store when the record has none yet.
pub(crate) fn id_value(id: Option<i32>) -> ActiveValue<i32> {
    id.map_or(NotSet, Set)
}
