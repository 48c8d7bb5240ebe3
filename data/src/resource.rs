/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use connector::ConnectorError;
use futures::stream::{Stream, StreamExt};
use std::fmt::Display;

/// Progress of a remote call: `Loading` once, then one terminal state.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> Resource<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(self) -> Option<T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Resource::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Resource::Success(data) => Ok(data),
            Resource::Error(message) => Err(message),
            Resource::Loading => Err("Request did not finish".to_string()),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for Resource<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Resource::Success(data),
            Err(e) => Resource::Error(e.to_string()),
        }
    }
}

pub(crate) fn failure<T>(e: ConnectorError) -> Resource<T> {
    tracing::warn!(error = %e, "Vehicle request failed");
    Resource::Error(e.to_string())
}

/// Drives `stream` to its end and returns the last terminal state.
pub async fn terminal<T>(stream: impl Stream<Item = Resource<T>>) -> Resource<T> {
    let mut stream = std::pin::pin!(stream);
    let mut last = Resource::Loading;

    while let Some(item) = stream.next().await {
        if item.is_terminal() {
            last = item;
        }
    }

    last
}
