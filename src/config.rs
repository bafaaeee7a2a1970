/// Service configuration.
///
/// Loaded from an optional TOML file (path in `NORMALS_CONFIG`, default
/// `normals.toml`; a missing file means defaults) with the database URL
/// taken from the environment so credentials stay out of the config file.
/// A `.env` file is honored via dotenv in `main`.

use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::calendar;

/// Config file consulted when `NORMALS_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "normals.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Start of the "recent window" the raw listing endpoints report —
    /// the last year of the dataset, not a hardcoded literal at call sites.
    pub recent_threshold: String,
    /// When set, the two-date normals endpoint validates both bounds
    /// against the recorded dataset, like the single-date endpoint always
    /// does. Off by default to match the reference behavior.
    pub validate_range_bounds: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            recent_threshold: "2017-01-01".to_string(),
            validate_range_bounds: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the TOML file, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self, Box<dyn Error>> {
        let path = env::var("NORMALS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let config = if Path::new(&path).exists() {
            let text = fs::read_to_string(&path)?;
            toml::from_str(&text)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects configuration values that would only fail later, mid-request.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        calendar::parse(&self.query.recent_threshold)
            .map_err(|e| format!("query.recent_threshold: {}", e))?;
        Ok(())
    }

    /// The address the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Database connection string, environment-only.
    pub fn database_url() -> Result<String, Box<dyn Error>> {
        env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set (environment or .env file)".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_behavior() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.query.recent_threshold, "2017-01-01");
        assert!(!config.query.validate_range_bounds);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_remaining_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [query]
            validate_range_bounds = true
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.query.recent_threshold, "2017-01-01");
        assert!(config.query.validate_range_bounds);
    }

    #[test]
    fn test_bind_addr_joins_host_and_port() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            "#,
        )
        .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_unparseable_threshold_fails_validation() {
        let config: AppConfig = toml::from_str(
            r#"
            [query]
            recent_threshold = "last year"
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
