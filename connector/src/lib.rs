/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod error;
pub mod vehicles;

pub use error::ConnectorError;

use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
    client: reqwest::Client,
}

impl RequestConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();

        Self {
            server_url,
            client: reqwest::Client::new(),
        }
    }
}

pub type RequestType = reqwest::Method;

async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ConnectorError> {
    let status = res.status();
    let bytes = res.bytes().await?;

    if !status.is_success() {
        return Err(ConnectorError::http(status, &bytes));
    }

    Ok(serde_json::from_slice::<T>(&bytes)?)
}

/// Checks the status of a response whose body carries nothing of interest.
async fn expect_success(res: reqwest::Response) -> Result<(), ConnectorError> {
    let status = res.status();

    if status.is_success() {
        return Ok(());
    }

    let bytes = res.bytes().await?;
    Err(ConnectorError::http(status, &bytes))
}

fn get_client(
    config: &RequestConfig,
    endpoint: &str,
    request_type: RequestType,
) -> reqwest::RequestBuilder {
    let url = format!("{}/api/{}", config.server_url, endpoint);
    tracing::debug!(method = %request_type, url = %url, "Sending request");

    config
        .client
        .request(request_type, url)
        .header("Content-Type", "application/json")
}
