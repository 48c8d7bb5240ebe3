/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::time::Duration;

pub const APP_DIR: &str = "registro";
pub const DATABASE_FILE: &str = "registro.db";

/// Pending table notifications per subscriber before it has to re-query.
pub const CHANGE_FEED_CAPACITY: usize = 64;

pub const DB_TIMEOUT: Duration = Duration::from_secs(8);

pub const VEHICLE_NOT_FOUND: &str = "Vehicle not found";
