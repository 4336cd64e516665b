//! Application bootstrap.
//!
//! [`Application::bootstrap`] brings the database to a usable state: it
//! connects, creates missing tables and seeds demo data on first start. From
//! there the application either runs its own HTTP listener
//! ([`Application::run`]) or hands its router to a host server
//! ([`Application::into_router`]).

use crate::{
    config::{
        AppConfig,
        database::{create_connection, create_tables},
    },
    errors::Result,
    generator::{DataGenerator, SeedOutcome},
    web::{self, AppState},
};
use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// A bootstrapped application with a ready database.
#[derive(Debug)]
pub struct Application {
    config: AppConfig,
    db: DatabaseConnection,
}

impl Application {
    /// Connects to the database, ensures the schema and seeds demo data if
    /// the database is empty.
    ///
    /// # Errors
    /// Returns an error if the connection, table creation or seeding fails.
    #[instrument(skip_all)]
    pub async fn bootstrap(config: AppConfig) -> Result<Self> {
        let db = create_connection(&config.database_url).await?;
        create_tables(&db).await?;

        let outcome = DataGenerator::new(db.clone(), config.generator.clone())
            .load_data()
            .await?;
        if let SeedOutcome::Generated(summary) = outcome {
            info!("Seeded {} orders", summary.orders);
        }

        Ok(Self { config, db })
    }

    /// The pooled database connection.
    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Router for mounting inside an externally managed server.
    #[must_use]
    pub fn into_router(self) -> Router {
        web::router(AppState::new(self.db))
    }

    /// Binds the configured address and serves until shutdown.
    ///
    /// # Errors
    /// Returns an error if the address cannot be bound or the server fails.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.server.bind_address).await?;
        web::serve(listener, self.into_router()).await
    }
}
