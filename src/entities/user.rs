//! User entity - Staff accounts that place and process orders.
//!
//! Passwords are never stored in clear text; `password_hash` holds the
//! salted digest produced by [`crate::core::password::encode`].

use super::types::Role;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login email, unique across all users
    #[sea_orm(unique)]
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Salted password digest
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// What the user is allowed to do
    pub role: Role,
    /// Locked accounts cannot be edited or removed from the admin screens
    pub locked: bool,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user authors many history entries
    #[sea_orm(has_many = "super::history_item::Entity")]
    HistoryItems,
}

impl Related<super::history_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HistoryItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
