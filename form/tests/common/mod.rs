/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use data::database::connect_url;
use data::store::Store;
use form::{CrudForm, Editable, Snapshot};
use std::time::Duration;
use tempfile::TempDir;

pub struct TestStore {
    pub store: Store,
    pub dir: TempDir,
}

pub async fn temp_store() -> TestStore {
    let dir = tempfile::tempdir().unwrap();
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("registro.db").display()
    );
    let db = connect_url(&url, 1, false).await.unwrap();

    TestStore {
        store: Store::new(db),
        dir,
    }
}

/// Waits for a snapshot matching `done`, failing the test after a while.
pub async fn settle<R: Editable>(
    form: &CrudForm<R>,
    done: impl FnMut(&Snapshot<R>) -> bool,
) -> Snapshot<R> {
    tokio::time::timeout(Duration::from_secs(5), form.wait_until(done))
        .await
        .expect("form did not settle")
}

pub async fn loaded<R: Editable>(form: &CrudForm<R>) -> Snapshot<R> {
    settle(form, |s| !s.is_loading).await
}
