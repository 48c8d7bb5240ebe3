/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::greater_than_zero;
use super::store::Store;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Cli {
    #[arg(long, env = "REGISTRO_LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,
    #[arg(long, env = "REGISTRO_DATABASE_URL", global = true)]
    pub database_url: Option<String>,
    #[arg(long, env = "REGISTRO_DATABASE_URL_FILE", global = true)]
    pub database_url_file: Option<String>,
    #[arg(
        long,
        env = "REGISTRO_API_URL",
        default_value = "http://127.0.0.1:5000",
        global = true
    )]
    pub api_url: String,
    #[arg(long, env = "REGISTRO_MAX_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "5", global = true)]
    pub max_connections: u32,
}

#[derive(Debug)]
pub struct AppState {
    pub store: Store,
    pub cli: Cli,
}
