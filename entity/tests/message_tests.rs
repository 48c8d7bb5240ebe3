/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for message entity and its sender role enum

use chrono::NaiveDate;
use entity::message::SenderRole;
use entity::*;
use sea_orm::{ActiveEnum, DatabaseBackend, MockDatabase, entity::prelude::*};

#[test]
fn test_sender_role_values() {
    assert_eq!(SenderRole::Operator.to_value(), 0);
    assert_eq!(SenderRole::Owner.to_value(), 1);
    assert_eq!(SenderRole::try_from_value(&1).unwrap(), SenderRole::Owner);
    assert!(SenderRole::try_from_value(&5).is_err());
    assert_eq!(SenderRole::default(), SenderRole::Operator);
}

#[tokio::test]
async fn test_message_entity_filter_by_ticket() -> Result<(), DbErr> {
    let naive_date = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(18, 15, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results([vec![message::Model {
            id: 3,
            content: "Can you send a photo of the error?".to_owned(),
            date: naive_date,
            sender_name: "Ana".to_owned(),
            sender_role: SenderRole::Owner,
            ticket_id: 7,
        }]])
        .into_connection();

    let messages = message::Entity::find()
        .filter(message::Column::TicketId.eq(7))
        .all(&db)
        .await?;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender_role, SenderRole::Owner);
    assert_eq!(messages[0].ticket_id, 7);

    Ok(())
}
