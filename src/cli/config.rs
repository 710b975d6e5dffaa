//! Service configuration file
//!
//! A JSON document; every key is optional:
//!
//! ```json
//! {
//!   "server": { "host": "127.0.0.1", "port": 8080, "cors_origins": [] },
//!   "seed_exercises": 3,
//!   "log_filter": "exercise_api=info,tower_http=info"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::http_server::HttpServerConfig;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Demo exercises created at startup (default 3)
    #[serde(default = "default_seed_exercises")]
    pub seed_exercises: usize,

    /// `tracing` filter directives, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_seed_exercises() -> usize {
    3
}

fn default_log_filter() -> String {
    "exercise_api=info,tower_http=info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            seed_exercises: default_seed_exercises(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Write this configuration to `path`, refusing to overwrite
    pub fn write_new(&self, path: &Path) -> CliResult<()> {
        if path.exists() {
            return Err(CliError::already_initialized(path));
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content + "\n")?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        self.env_filter()?;

        Ok(())
    }

    /// Parse `log_filter` into a `tracing` filter
    pub fn env_filter(&self) -> CliResult<EnvFilter> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            CliError::config_error(format!("Invalid log_filter '{}': {}", self.log_filter, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.seed_exercises, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"server": {"port": 9100}, "seed_exercises": 0}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.seed_exercises, 0);
    }

    #[test]
    fn test_load_rejects_zero_port() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"server": {"port": 0}}"#).unwrap();

        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.code_str(), "EXERCISE_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ nope").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_invalid_log_filter() {
        let config = Config {
            log_filter: "exercise_api=notalevel".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_write_new_round_trips_and_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        Config::default().write_new(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());

        let err = Config::default().write_new(&path).unwrap_err();
        assert_eq!(err.code_str(), "EXERCISE_CLI_ALREADY_INITIALIZED");
    }
}
