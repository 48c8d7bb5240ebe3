/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod records;
pub mod repository;
pub mod resource;
pub mod store;
pub mod types;
pub mod vehicles;

use anyhow::Result;
use database::connect_db;
use std::sync::Arc;
use store::Store;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<AppState>> {
    tracing::info!(api_url = %cli.api_url, "Starting Registro");

    let db = connect_db(&cli).await?;
    let store = Store::new(db);

    Ok(Arc::new(AppState { store, cli }))
}
