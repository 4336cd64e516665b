//! Application settings loaded from config.toml
//!
//! Every field has a default, so the file is optional: a missing file yields
//! the defaults, while a file that exists but cannot be parsed is an error.
//! The database location is not part of the file; it comes from `DATABASE_URL`.

use crate::config::database::get_database_url;
use crate::errors::{Error, Result};
use crate::generator::catalog::DISTINCT_PRODUCT_NAMES;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Default location of the settings file, overridable with `BAKERY_CONFIG`.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection string for the database
    pub database_url: String,
    /// HTTP server settings
    pub server: ServerConfig,
    /// Demo data generator settings
    pub generator: GeneratorConfig,
}

/// Structure of the config.toml file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Demo data generator settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Seed for the random generator; the same seed yields the same data
    pub seed: u64,
    /// Number of full calendar years of orders before the current one
    pub years_to_include: i32,
    /// Products that orders are drawn from
    pub product_count: usize,
    /// Additional products that only appear in the catalog
    pub extra_product_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            years_to_include: 2,
            product_count: 8,
            extra_product_count: 4,
        }
    }
}

impl GeneratorConfig {
    /// Rejects settings the generator cannot work with.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when no products would be available to orders,
    /// when more products are requested than there are distinct names, or when
    /// the year span is negative.
    pub fn validate(&self) -> Result<()> {
        // Orders hold up to three distinct products.
        if self.product_count < 3 {
            return Err(Error::Config {
                message: format!(
                    "generator.product_count must be at least 3, got {}",
                    self.product_count
                ),
            });
        }
        let total = self.product_count.saturating_add(self.extra_product_count);
        if total > DISTINCT_PRODUCT_NAMES {
            return Err(Error::Config {
                message: format!(
                    "generator.product_count + generator.extra_product_count must not exceed \
                     {DISTINCT_PRODUCT_NAMES} distinct product names, got {total}"
                ),
            });
        }
        if self.years_to_include < 0 {
            return Err(Error::Config {
                message: format!(
                    "generator.years_to_include cannot be negative, got {}",
                    self.years_to_include
                ),
            });
        }
        Ok(())
    }
}

/// Parses the settings file at `path`.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or contains unknown keys
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.as_ref().display()),
    })?;

    parse_config(&contents)
}

/// Parses settings from a TOML string.
///
/// # Errors
/// Returns [`Error::Config`] if the TOML is invalid.
pub fn parse_config(contents: &str) -> Result<ConfigFile> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Resolves the full application configuration from the environment and the
/// settings file.
///
/// # Errors
/// Returns an error if the settings file exists but is invalid.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("BAKERY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    debug!("Attempting to load configuration from: {}", path);

    let file = if Path::new(&path).exists() {
        load_config(&path)?
    } else {
        warn!("Config file {} not found, using defaults", path);
        ConfigFile::default()
    };
    file.generator.validate()?;

    let config = AppConfig {
        database_url: get_database_url(),
        server: file.server,
        generator: file.generator,
    };
    info!(
        "Configuration loaded: bind address {}, generator seed {}",
        config.server.bind_address, config.generator.seed
    );
    Ok(config)
}
