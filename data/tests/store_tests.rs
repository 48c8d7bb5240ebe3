/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the local table gateway and its change feed

mod common;

use common::*;
use data::records::*;

#[tokio::test]
async fn test_upsert_assigns_id_and_round_trips() {
    let test = temp_store().await;
    let table = test.store.table::<Technician>();

    let saved = table.upsert(Technician::new("Juan", 100.0)).await.unwrap();
    let id = saved.id.expect("store assigns an id");

    let found = table.find(id).await.unwrap();
    assert_eq!(
        found,
        Some(Technician {
            id: Some(id),
            name: "Juan".to_string(),
            salary: 100.0,
        })
    );
}

#[tokio::test]
async fn test_upsert_existing_replaces_row() {
    let test = temp_store().await;
    let table = test.store.table::<Priority>();

    let saved = table.upsert(Priority::new("Alta")).await.unwrap();
    table.upsert(Priority::new("Baja")).await.unwrap();

    let edited = table
        .upsert(Priority {
            id: saved.id,
            description: "Urgente".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(edited.id, saved.id);

    let all = table.list(None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].description, "Urgente");
    assert_eq!(all[1].description, "Baja");
}

#[tokio::test]
async fn test_upsert_unknown_id_inserts() {
    let test = temp_store().await;
    let table = test.store.table::<Priority>();

    let saved = table
        .upsert(Priority {
            id: Some(40),
            description: "Media".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(saved.id, Some(40));
    assert_eq!(table.list(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_by_id() {
    let test = temp_store().await;
    let table = test.store.table::<Technician>();

    let first = table.upsert(Technician::new("Ana", 50.0)).await.unwrap();
    let second = table.upsert(Technician::new("Luis", 75.0)).await.unwrap();

    assert!(table.delete(first.id.unwrap()).await.unwrap());
    assert!(!table.delete(first.id.unwrap()).await.unwrap());

    let all = table.list(None).await.unwrap();
    assert_eq!(all, vec![second]);
}

#[tokio::test]
async fn test_watch_emits_on_table_writes() {
    let test = temp_store().await;
    let table = test.store.table::<Technician>();
    let mut watch = table.watch(None);

    assert!(next(&mut watch).await.unwrap().is_empty());

    // writes to other tables do not wake the listing
    test.store
        .table::<Priority>()
        .upsert(Priority::new("Alta"))
        .await
        .unwrap();
    let saved = table.upsert(Technician::new("Juan", 100.0)).await.unwrap();

    assert_eq!(next(&mut watch).await.unwrap(), vec![saved.clone()]);

    table.delete(saved.id.unwrap()).await.unwrap();
    assert!(next(&mut watch).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_message_sender_role_persists() {
    let test = temp_store().await;
    let table = test.store.table::<Message>();

    let saved = table
        .upsert(Message {
            content: "Se reinicio el equipo".to_string(),
            sender_name: "Maria".to_string(),
            sender_role: SenderRole::Owner,
            ..Message::for_ticket(3)
        })
        .await
        .unwrap();

    let found = table.find(saved.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(found.sender_role, SenderRole::Owner);
    assert_eq!(found.ticket_id, 3);
}
