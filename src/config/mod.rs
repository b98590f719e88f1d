//! Configuration loading and management
//!
//! Values come from three layers, later ones winning:
//! built-in defaults, an optional YAML file named by `LISTINGS_CONFIG`,
//! then individual environment variables (a `.env` file is honoured).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::Validate;

/// Environment variable naming an optional YAML config file
pub const CONFIG_FILE_ENV: &str = "LISTINGS_CONFIG";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (`HOST`)
    #[validate(length(min = 1))]
    pub host: String,

    /// Port to bind (`PORT`)
    #[validate(range(min = 1))]
    pub port: u16,

    /// Path of the JSON listing fixture (`FIXTURE_PATH`)
    #[validate(length(min = 1))]
    pub fixture_path: String,

    /// Reported by the health endpoint (`API_MODE`)
    #[validate(length(min = 1))]
    pub mode: String,

    /// Artificial delay before searches and lookups, 0 disables it
    /// (`SIMULATED_LATENCY_MS`)
    pub simulated_latency_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            fixture_path: "data/mock_listings.json".to_string(),
            mode: "mock".to_string(),
            simulated_latency_ms: 0,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("invalid config file {}", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load the full configuration for the running process
    pub fn load() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let mut config = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate().context("invalid server configuration")?;

        Ok(config)
    }

    /// Override fields from a key lookup (normally the environment)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", port))?;
        }
        if let Some(path) = lookup("FIXTURE_PATH") {
            self.fixture_path = path;
        }
        if let Some(mode) = lookup("API_MODE") {
            self.mode = mode;
        }
        if let Some(ms) = lookup("SIMULATED_LATENCY_MS") {
            self.simulated_latency_ms = ms.parse().with_context(|| {
                format!("SIMULATED_LATENCY_MS must be a whole number, got '{}'", ms)
            })?;
        }
        Ok(())
    }

    /// `host:port` string to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.port, 3001);
        assert_eq!(config.mode, "mock");
        assert_eq!(config.simulated_latency(), Duration::ZERO);
        assert_eq!(config.bind_address(), "127.0.0.1:3001");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ServerConfig::from_yaml_str("port: 8080\nmode: live\n").unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.mode, "live");
        assert_eq!(config.fixture_path, "data/mock_listings.json");
    }

    #[test]
    fn test_yaml_serialization() {
        let config = ServerConfig {
            simulated_latency_ms: 300,
            ..ServerConfig::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();

        // Should be able to parse it back
        let parsed = ServerConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_env_overrides_win() {
        let mut config = ServerConfig::from_yaml_str("port: 8080").unwrap();
        config
            .apply_overrides(lookup(&[
                ("PORT", "9090"),
                ("HOST", "0.0.0.0"),
                ("FIXTURE_PATH", "/srv/listings.json"),
                ("API_MODE", "live"),
                ("SIMULATED_LATENCY_MS", "250"),
            ]))
            .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:9090");
        assert_eq!(config.fixture_path, "/srv/listings.json");
        assert_eq!(config.mode, "live");
        assert_eq!(config.simulated_latency(), Duration::from_millis(250));
    }

    #[test]
    fn test_bad_port_override_is_an_error() {
        let mut config = ServerConfig::default();
        let err = config.apply_overrides(lookup(&[("PORT", "abc")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_validation_rejects_port_zero_and_empty_fixture() {
        let config = ServerConfig {
            port: 0,
            fixture_path: String::new(),
            ..ServerConfig::default()
        };
        let errors = config.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("port"));
        assert!(fields.contains_key("fixture_path"));
    }

    #[test]
    fn test_missing_yaml_file() {
        let err = ServerConfig::from_yaml_file("/nonexistent/listings.yaml").unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
