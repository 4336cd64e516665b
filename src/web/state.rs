//! Application state for Axum handlers.

use sea_orm::DatabaseConnection;

/// Application state shared across all HTTP handlers.
///
/// `DatabaseConnection` wraps a pool, so cloning the state is cheap.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
