//! Application settings loading from config.toml
//!
//! This module provides the top-level [`AppConfig`] structure and the logic
//! to load it from a TOML file with environment overrides. A missing config
//! file is not an error; the defaults cover local development out of the box.
//!
//! Recognized environment variables:
//! - `FOODIEBOT_CONFIG` - path to the config file (default `./config.toml`)
//! - `DATABASE_URL` - overrides the configured database URL

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Top-level application configuration, parsed from config.toml.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `SQLite` connection URL for the catalog database
    pub database_url: String,
    /// Catalog seeding behavior
    pub catalog: CatalogConfig,
}

/// Configuration for seeding an empty catalog on startup.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// Optional JSON seed file; when present it wins over random generation
    pub seed_file: Option<String>,
    /// Number of products to generate when no seed file is available
    pub seed_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://data/foodiebot.sqlite?mode=rwc".to_string(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            seed_count: 100,
        }
    }
}

/// Loads application configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the application configuration with environment overrides.
///
/// Reads the file named by `FOODIEBOT_CONFIG` (default `./config.toml`);
/// a missing file falls back to [`AppConfig::default`]. A `DATABASE_URL`
/// environment variable overrides the configured database URL either way.
///
/// # Errors
/// Returns an error if a config file exists but cannot be parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path =
        std::env::var("FOODIEBOT_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

    let mut config = if Path::new(&path).exists() {
        load_config(&path)?
    } else {
        info!("No config file found at '{path}', using defaults");
        AppConfig::default()
    };

    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.database_url = url;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            database_url = "sqlite://test/foodiebot.sqlite"

            [catalog]
            seed_file = "fast_food_products.json"
            seed_count = 25
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.database_url, "sqlite://test/foodiebot.sqlite");
        assert_eq!(
            config.catalog.seed_file.as_deref(),
            Some("fast_food_products.json")
        );
        assert_eq!(config.catalog.seed_count, 25);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.database_url, AppConfig::default().database_url);
        assert!(config.catalog.seed_file.is_none());
        assert_eq!(config.catalog.seed_count, 100);
    }

    #[test]
    fn test_partial_catalog_section() {
        let toml_str = r#"
            [catalog]
            seed_count = 10
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.catalog.seed_file.is_none());
        assert_eq!(config.catalog.seed_count, 10);
    }
}
