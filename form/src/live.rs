/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use data::resource::Resource;
use futures::stream::{BoxStream, StreamExt};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::source::Source;

/// State that follows a listing stream.
pub(crate) trait Listing<R> {
    fn apply(&mut self, update: Resource<Vec<R>>);
}

/// Feeds every listing update into `state` until the stream ends.
pub(crate) fn follow<S, R>(
    mut listing: BoxStream<'static, Resource<Vec<R>>>,
    state: Arc<watch::Sender<S>>,
) -> JoinHandle<()>
where
    S: Listing<R> + Send + Sync + 'static,
    R: Send + 'static,
{
    tokio::spawn(async move {
        while let Some(update) = listing.next().await {
            state.send_modify(|s| s.apply(update));
        }
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    pub items: Vec<R>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: true,
            error_message: None,
        }
    }
}

impl<R> Listing<R> for ListState<R> {
    fn apply(&mut self, update: Resource<Vec<R>>) {
        match update {
            Resource::Loading => self.is_loading = true,
            Resource::Success(items) => {
                self.items = items;
                self.is_loading = false;
                self.error_message = None;
            }
            Resource::Error(message) => {
                self.error_message = Some(message);
                self.is_loading = false;
            }
        }
    }
}

/// Read-only live list, used for pickers next to a form.
pub struct LiveList<R> {
    state: Arc<watch::Sender<ListState<R>>>,
    task: JoinHandle<()>,
}

impl<R: Clone + Send + Sync + 'static> LiveList<R> {
    /// Must be called inside a tokio runtime.
    pub fn new(source: &dyn Source<R>) -> Self {
        let (state, _) = watch::channel(ListState::default());
        let state = Arc::new(state);
        let task = follow(source.list(), state.clone());

        Self { state, task }
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState<R>> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ListState<R> {
        self.state.borrow().clone()
    }

    pub fn items(&self) -> Vec<R> {
        self.state.borrow().items.clone()
    }

    pub async fn wait_until(&self, mut done: impl FnMut(&ListState<R>) -> bool) -> ListState<R> {
        let mut receiver = self.state.subscribe();
        let state = receiver.wait_for(|s| done(s)).await.map(|s| s.clone());
        state.unwrap_or_else(|_| self.state())
    }

    pub async fn loaded(&self) -> ListState<R> {
        self.wait_until(|s| !s.is_loading).await
    }
}

impl<R> Drop for LiveList<R> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
