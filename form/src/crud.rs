/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use data::resource::Resource;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::error::{FieldError, ValidationErrors};
use super::live::{Listing, follow};
use super::source::Source;

/// A record a form can edit one field at a time.
pub trait Editable: Clone + Default + Send + Sync + 'static {
    type Field: Send;

    fn id(&self) -> Option<i32>;
    fn apply(&mut self, field: Self::Field);
    fn validate(&self) -> Result<(), ValidationErrors>;
}

pub type Validator<R> = fn(&R) -> Result<(), ValidationErrors>;

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<R> {
    pub draft: R,
    pub error_message: Option<String>,
    pub field_errors: Vec<FieldError>,
    pub items: Vec<R>,
    pub is_loading: bool,
    // error_message came from the listing, not from an edit
    listing_failed: bool,
}

impl<R> Snapshot<R> {
    fn new(draft: R) -> Self {
        Self {
            draft,
            error_message: None,
            field_errors: Vec::new(),
            items: Vec::new(),
            is_loading: true,
            listing_failed: false,
        }
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn fail(&mut self, message: String) {
        self.error_message = Some(message);
        self.listing_failed = false;
    }

    fn clear_errors(&mut self) {
        self.error_message = None;
        self.field_errors.clear();
        self.listing_failed = false;
    }
}

impl<R> Listing<R> for Snapshot<R> {
    fn apply(&mut self, update: Resource<Vec<R>>) {
        match update {
            Resource::Loading => self.is_loading = true,
            Resource::Success(items) => {
                self.items = items;
                self.is_loading = false;
                if self.listing_failed {
                    self.error_message = None;
                    self.listing_failed = false;
                }
            }
            Resource::Error(message) => {
                self.error_message = Some(message);
                self.is_loading = false;
                self.listing_failed = true;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent<F> {
    /// Load the record with this id into the draft. Ids `<= 0` mean a new
    /// record and fetch nothing.
    Select(i32),
    Change(F),
    Save,
    Delete,
    New,
    ClearErrors,
    Refresh,
}

/// State container for one editing screen: a draft, its validation
/// errors and the live list of stored records.
pub struct CrudForm<R: Editable> {
    source: Arc<dyn Source<R>>,
    state: Arc<watch::Sender<Snapshot<R>>>,
    blank: Arc<dyn Fn() -> R + Send + Sync>,
    validate: Validator<R>,
    listing: JoinHandle<()>,
}

impl<R: Editable> CrudForm<R> {
    /// Starts following the source listing, so this must run inside a tokio
    /// runtime.
    pub fn new(source: Arc<dyn Source<R>>) -> Self {
        Self::with_blank(source, R::default)
    }

    pub fn with_blank(
        source: Arc<dyn Source<R>>,
        blank: impl Fn() -> R + Send + Sync + 'static,
    ) -> Self {
        let (state, _) = watch::channel(Snapshot::new(blank()));
        let state = Arc::new(state);
        let listing = follow(source.list(), state.clone());

        Self {
            source,
            state,
            blank: Arc::new(blank),
            validate: R::validate,
            listing,
        }
    }

    pub fn with_validator(mut self, validate: Validator<R>) -> Self {
        self.validate = validate;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<R>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> Snapshot<R> {
        self.state.borrow().clone()
    }

    pub async fn wait_until(&self, mut done: impl FnMut(&Snapshot<R>) -> bool) -> Snapshot<R> {
        let mut receiver = self.state.subscribe();
        let snapshot = receiver.wait_for(|s| done(s)).await.map(|s| s.clone());
        snapshot.unwrap_or_else(|_| self.snapshot())
    }

    /// Waits for the first listing (or listing failure) to arrive.
    pub async fn loaded(&self) -> Snapshot<R> {
        self.wait_until(|s| !s.is_loading).await
    }

    /// Applies `event` and reports whether it succeeded.
    pub async fn on_event(&self, event: FormEvent<R::Field>) -> bool {
        match event {
            FormEvent::Select(id) => self.select(id).await,
            FormEvent::Change(field) => {
                self.change(field);
                true
            }
            FormEvent::Save => self.save().await,
            FormEvent::Delete => self.delete().await,
            FormEvent::New => {
                self.reset();
                true
            }
            FormEvent::ClearErrors => {
                self.clear_errors();
                true
            }
            FormEvent::Refresh => {
                self.refresh();
                true
            }
        }
    }

    pub async fn select(&self, id: i32) -> bool {
        if id <= 0 {
            return false;
        }

        match self.source.find(id).await {
            Ok(Some(record)) => {
                self.state.send_modify(|s| {
                    s.draft = record;
                    s.clear_errors();
                });
                true
            }
            Ok(None) => {
                debug!(id, "Selected record does not exist");
                let blank = (self.blank)();
                self.state.send_modify(|s| s.draft = blank);
                false
            }
            Err(message) => {
                self.state.send_modify(|s| s.fail(message));
                false
            }
        }
    }

    pub fn change(&self, field: R::Field) {
        self.state.send_modify(|s| s.draft.apply(field));
    }

    pub async fn save(&self) -> bool {
        let draft = self.state.borrow().draft.clone();

        if let Err(errors) = (self.validate)(&draft) {
            debug!(%errors, "Draft failed validation");
            self.state.send_modify(|s| {
                s.fail(errors.to_string());
                s.field_errors = errors.into_errors();
            });
            return false;
        }

        match self.source.save(draft).await {
            Ok(saved) => {
                self.state.send_modify(|s| {
                    s.draft = saved;
                    s.clear_errors();
                });
                true
            }
            Err(message) => {
                warn!(%message, "Failed to save draft");
                self.state.send_modify(|s| s.fail(message));
                false
            }
        }
    }

    /// Deletes the stored record with the draft's id. A draft without an
    /// id deletes nothing.
    pub async fn delete(&self) -> bool {
        let draft = self.state.borrow().draft.clone();

        if draft.id().is_none() {
            return false;
        }

        match self.source.delete(draft).await {
            Ok(deleted) => {
                self.reset();
                deleted
            }
            Err(message) => {
                warn!(%message, "Failed to delete record");
                self.state.send_modify(|s| s.fail(message));
                false
            }
        }
    }

    pub fn reset(&self) {
        let blank = (self.blank)();
        self.state.send_modify(|s| {
            s.draft = blank;
            s.clear_errors();
        });
    }

    pub fn clear_errors(&self) {
        self.state.send_modify(Snapshot::clear_errors);
    }

    pub fn refresh(&self) {
        self.source.refresh();
    }
}

impl<R: Editable> Drop for CrudForm<R> {
    fn drop(&mut self) {
        self.listing.abort();
    }
}
