use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Settings for talking to the recipe service
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Base URL of the JSON API, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Query used to fill the featured list
    #[serde(default = "default_featured_query")]
    pub featured_query: String,
    /// How many featured recipes to show
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            featured_query: default_featured_query(),
            featured_limit: default_featured_limit(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_featured_query() -> String {
    "chicken".to_string()
}

fn default_featured_limit() -> usize {
    12
}

impl SearchConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. mealdb.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// HTTP timeout; a zero setting falls back to one second
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.max(1))
    }
}

/// Load configuration from file and environment variables
///
/// See [`SearchConfig::load`] for the precedence rules.
pub fn load_config() -> Result<SearchConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("mealdb").required(false))
        .add_source(
            Environment::with_prefix("MEALDB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        let config = SearchConfig::default();
        assert_eq!(config.base_url, "https://www.themealdb.com/api/json/v1/1");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.featured_query, "chicken");
        assert_eq!(config.featured_limit, 12);
    }

    #[test]
    fn test_partial_source_fills_defaults() {
        let config: SearchConfig = Config::builder()
            .add_source(File::from_str(
                "base_url = \"http://localhost:9000\"\nfeatured_limit = 3",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.featured_limit, 3);
        assert_eq!(config.timeout, 30);
        assert_eq!(config.featured_query, "chicken");
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let config = SearchConfig {
            timeout: 0,
            ..SearchConfig::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
        assert_eq!(
            SearchConfig::default().request_timeout(),
            Duration::from_secs(30)
        );
    }
}
