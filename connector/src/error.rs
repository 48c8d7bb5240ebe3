/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The server answered with a non-success status. `message` is the
    /// response body when there is one, else the status line.
    #[error("Connection error {message}")]
    Http { status: StatusCode, message: String },
    #[error("Error {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Error decoding response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ConnectorError {
    pub fn http(status: StatusCode, body: &[u8]) -> Self {
        let body = String::from_utf8_lossy(body).trim().to_string();

        let message = if body.is_empty() {
            status.to_string()
        } else {
            body
        };

        ConnectorError::Http { status, message }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ConnectorError::Http { status, .. } => Some(*status),
            ConnectorError::Transport(err) => err.status(),
            ConnectorError::Decode(_) => None,
        }
    }
}
