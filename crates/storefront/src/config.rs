//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ROCKETSHOES_API_URL` - Base URL of the catalogue API (default: `http://localhost:3333`)
//! - `ROCKETSHOES_STORAGE_PATH` - Key-value storage file holding the cart
//!   (default: `.rocketshoes/storage.json`)
//! - `ROCKETSHOES_PRODUCT_CACHE_TTL_SECS` - How long product metadata is cached
//!   (default: 300)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:3333";
const DEFAULT_STORAGE_PATH: &str = ".rocketshoes/storage.json";
const DEFAULT_PRODUCT_CACHE_TTL_SECS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalogue API settings
    pub api: CatalogApiConfig,
    /// Where the key-value store backing the cart lives
    pub storage_path: PathBuf,
}

/// Catalogue API client configuration.
#[derive(Debug, Clone)]
pub struct CatalogApiConfig {
    /// Base URL, always ending in `/` so relative paths join beneath it
    pub base_url: Url,
    /// Time-to-live for cached product metadata
    pub product_cache_ttl: Duration,
}

impl CatalogApiConfig {
    /// Build a config for the given base URL with default cache settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the URL cannot be parsed.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("ROCKETSHOES_API_URL", base_url)?,
            product_cache_ttl: Duration::from_secs(DEFAULT_PRODUCT_CACHE_TTL_SECS),
        })
    }

    fn from_env() -> Result<Self, ConfigError> {
        let base_url = parse_base_url(
            "ROCKETSHOES_API_URL",
            &get_env_or_default("ROCKETSHOES_API_URL", DEFAULT_API_URL),
        )?;
        let ttl_secs = get_env_or_default(
            "ROCKETSHOES_PRODUCT_CACHE_TTL_SECS",
            &DEFAULT_PRODUCT_CACHE_TTL_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar(
                "ROCKETSHOES_PRODUCT_CACHE_TTL_SECS".to_string(),
                e.to_string(),
            )
        })?;

        Ok(Self {
            base_url,
            product_cache_ttl: Duration::from_secs(ttl_secs),
        })
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api = CatalogApiConfig::from_env()?;
        let storage_path =
            PathBuf::from(get_env_or_default("ROCKETSHOES_STORAGE_PATH", DEFAULT_STORAGE_PATH));

        Ok(Self { api, storage_path })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a base URL, normalizing it to end with a slash.
///
/// `Url::join` replaces the last path segment unless the base ends in `/`,
/// so `http://host/api` would otherwise resolve `stock/1` to `http://host/stock/1`.
fn parse_base_url(var_name: &str, value: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("{value} cannot be used as a base URL"),
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_adds_trailing_slash() {
        let url = parse_base_url("TEST_VAR", "http://localhost:3333/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3333/api/");
        assert_eq!(
            url.join("stock/1").unwrap().as_str(),
            "http://localhost:3333/api/stock/1"
        );
    }

    #[test]
    fn test_parse_base_url_keeps_root() {
        let url = parse_base_url("TEST_VAR", "http://localhost:3333").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3333/");
    }

    #[test]
    fn test_parse_base_url_invalid() {
        let err = parse_base_url("TEST_VAR", "not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(name, _) if name == "TEST_VAR"));
    }

    #[test]
    fn test_parse_base_url_rejects_non_base() {
        assert!(parse_base_url("TEST_VAR", "mailto:shop@rocketshoes.test").is_err());
    }

    #[test]
    fn test_catalog_api_config_defaults() {
        let config = CatalogApiConfig::new("http://127.0.0.1:4000").unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:4000/");
        assert_eq!(config.product_cache_ttl, Duration::from_secs(300));
        assert_eq!(
            config.product_cache_ttl,
            Duration::from_secs(DEFAULT_PRODUCT_CACHE_TTL_SECS)
        );
    }
}
