/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for technician and priority entities

use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};

#[tokio::test]
async fn test_technician_entity_basic() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results([vec![technician::Model {
            id: 1,
            name: "Juan".to_owned(),
            salary: 100.0,
        }]])
        .into_connection();

    let result = technician::Entity::find_by_id(1).one(&db).await?;

    assert!(result.is_some());
    let technician = result.unwrap();
    assert_eq!(technician.name, "Juan");
    assert_eq!(technician.salary, 100.0);

    Ok(())
}

#[tokio::test]
async fn test_technician_entity_missing() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results([Vec::<technician::Model>::new()])
        .into_connection();

    let result = technician::Entity::find_by_id(42).one(&db).await?;
    assert!(result.is_none());

    Ok(())
}

#[tokio::test]
async fn test_priority_entity_list() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results([vec![
            priority::Model {
                id: 1,
                description: "Alta".to_owned(),
            },
            priority::Model {
                id: 2,
                description: "Baja".to_owned(),
            },
        ]])
        .into_connection();

    let priorities = priority::Entity::find().all(&db).await?;

    assert_eq!(priorities.len(), 2);
    assert_eq!(priorities[0].description, "Alta");
    assert_eq!(priorities[1].id, 2);

    Ok(())
}
