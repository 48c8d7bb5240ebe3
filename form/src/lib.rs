/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod crud;
pub mod error;
pub mod live;
pub mod message;
pub mod priority;
pub mod source;
pub mod technician;
pub mod ticket;
pub mod vehicle;

pub use crud::{CrudForm, Editable, FormEvent, Snapshot, Validator};
pub use error::{FieldError, ValidationErrors};
pub use live::{ListState, LiveList};
pub use source::{LocalSource, Source};
