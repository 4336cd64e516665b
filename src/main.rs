use bakery_orders::{app::Application, config, errors::Result};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Connect, create tables and seed demo data on first start
    let application = Application::bootstrap(app_config)
        .await
        .inspect(|_| info!("Application initialized"))
        .inspect_err(|e| error!("Failed to initialize application: {}", e))?;

    // 5. Serve HTTP until shutdown
    application
        .run()
        .await
        .inspect_err(|e| error!("Server error: {}", e))
}
