//! Enumerations stored as string columns.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an order.
///
/// The usual path is `New -> Confirmed -> Ready -> Delivered`. An order can be
/// cancelled at any point, and `Problem` flags an order the bakery cannot fulfil.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "order_state")]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    #[sea_orm(string_value = "new")]
    New,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "ready")]
    Ready,
    #[sea_orm(string_value = "delivered")]
    Delivered,
    #[sea_orm(string_value = "problem")]
    Problem,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl OrderState {
    /// Delivered and cancelled orders never change state again.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Lower-case name, as stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Confirmed => "confirmed",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Problem => "problem",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a staff account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "role")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[sea_orm(string_value = "baker")]
    Baker,
    #[sea_orm(string_value = "barista")]
    Barista,
    #[sea_orm(string_value = "admin")]
    Admin,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    #[test]
    fn test_terminal_states() {
        assert!(OrderState::Delivered.is_terminal());
        assert!(OrderState::Cancelled.is_terminal());
        assert!(!OrderState::New.is_terminal());
        assert!(!OrderState::Confirmed.is_terminal());
        assert!(!OrderState::Ready.is_terminal());
        assert!(!OrderState::Problem.is_terminal());
    }

    #[test]
    fn test_display_matches_stored_value() {
        for state in OrderState::iter() {
            assert_eq!(state.to_string(), state.to_value());
        }
    }
}
