//! Order entity - A customer order due at a pickup location.
//!
//! The current `state` always mirrors the `new_state` of the order's most
//! recent history entry.

use super::types::OrderState;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The customer this order is for
    pub customer_id: i64,
    /// Where the order will be collected
    pub pickup_location_id: i64,
    /// Day the order is due
    pub due_date: Date,
    /// Time of day the order is due
    pub due_time: Time,
    /// Current lifecycle state
    pub state: OrderState,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order belongs to one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    /// Each order is picked up at one location
    #[sea_orm(
        belongs_to = "super::pickup_location::Entity",
        from = "Column::PickupLocationId",
        to = "super::pickup_location::Column::Id"
    )]
    PickupLocation,
    /// One order has many items
    #[sea_orm(has_many = "super::order_item::Entity")]
    Items,
    /// One order has many history entries
    #[sea_orm(has_many = "super::history_item::Entity")]
    History,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::pickup_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PickupLocation.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl Related<super::history_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::History.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
