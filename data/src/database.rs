/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::prelude::*;
use std::path::PathBuf;
use tracing::log::LevelFilter;

use super::consts::{APP_DIR, DATABASE_FILE, DB_TIMEOUT};
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        default_database_url()?
    };

    connect_url(&db_url, cli.max_connections, cli.log_level == "debug").await
}

/// Opens the store at `db_url` and brings its schema up to date.
pub async fn connect_url(
    db_url: &str,
    max_connections: u32,
    sql_logging: bool,
) -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url.to_string());

    if sql_logging {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(DB_TIMEOUT)
        .acquire_timeout(DB_TIMEOUT);

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    let pending = Migrator::get_pending_migrations(&db)
        .await
        .context("Failed to read migration state")?;
    if !pending.is_empty() {
        tracing::info!(count = pending.len(), "Applying database migrations");
    }

    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;

    Ok(db)
}

fn default_database_url() -> Result<String> {
    let dir: PathBuf = dirs::data_dir()
        .context("Failed to determine data directory")?
        .join(APP_DIR);

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;

    let path = dir.join(DATABASE_FILE);
    tracing::debug!(path = %path.display(), "Using default database");

    Ok(format!("sqlite://{}?mode=rwc", path.display()))
}
