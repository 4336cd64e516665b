//! History item entity - One entry of an order's state trail.
//!
//! Entries are append-only. Ordered by `timestamp` they describe how the order
//! reached its current state and who moved it there.

use super::types::OrderState;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// History item database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "history_items")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Order this entry belongs to
    pub order_id: i64,
    /// User who made the change
    pub created_by_id: i64,
    /// State the order moved into
    pub new_state: OrderState,
    /// Human-readable description (e.g., "Order confirmed")
    pub message: String,
    /// When the change happened
    pub timestamp: DateTime,
}

/// Defines relationships between `HistoryItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each entry belongs to one order
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
    /// Each entry was made by one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedById",
        to = "super::user::Column::Id"
    )]
    CreatedBy,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedBy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
