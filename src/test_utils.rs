//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.
#![allow(clippy::unwrap_used)]

use crate::{
    core::{
        order::{NewCustomer, NewHistoryItem, NewOrder, NewOrderItem},
        pickup_location, product,
        user::{self, NewUser},
    },
    entities::{self, OrderState, Role},
    errors::Result,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

pub fn test_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn test_datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    test_date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// User input with the password `"secret"` and the names "Test User".
pub fn test_new_user(email: &str, role: Role) -> NewUser {
    NewUser {
        email: email.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        password: "secret".to_string(),
        role,
        locked: false,
    }
}

/// A single-item order in state `New`, due 2024-03-08 at noon.
///
/// # Defaults
/// * quantity: 1
/// * customer: "Test Customer"
/// * history: one "Order placed" entry at `placed`
pub fn test_new_order(
    product_id: i64,
    pickup_location_id: i64,
    created_by_id: i64,
    placed: NaiveDateTime,
) -> NewOrder {
    NewOrder {
        customer: NewCustomer {
            full_name: "Test Customer".to_string(),
            phone_number: "+1-555-0000".to_string(),
            details: None,
        },
        pickup_location_id,
        due_date: test_date(2024, 3, 8),
        due_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        state: OrderState::New,
        items: vec![NewOrderItem {
            product_id,
            quantity: 1,
            comment: None,
        }],
        history: vec![NewHistoryItem {
            new_state: OrderState::New,
            message: "Order placed".to_string(),
            timestamp: placed,
            created_by_id,
        }],
    }
}

/// A database holding one barista, one product and one pickup location.
pub struct CatalogFixture {
    pub db: DatabaseConnection,
    pub barista: entities::user::Model,
    pub product: entities::product::Model,
    pub location: entities::pickup_location::Model,
}

/// Sets up a complete test environment ready for placing orders.
pub async fn setup_with_catalog() -> Result<CatalogFixture> {
    let db = setup_test_db().await?;
    let barista = user::create_user(&db, test_new_user("barista@test.local", Role::Barista)).await?;
    let product = product::create_product(&db, "Test Bun", 250).await?;
    let location = pickup_location::create_pickup_location(&db, "Test Store").await?;
    Ok(CatalogFixture {
        db,
        barista,
        product,
        location,
    })
}
