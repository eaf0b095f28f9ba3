//! # Configuration Management for SortKit
//!
//! This crate provides centralized configuration structures for all SortKit components:
//! how sort state is keyed and rendered, and where sessions are kept.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{SessionConfig, SortConfig};
//!
//! let sort_config = SortConfig::default().with_passthrough_params(vec!["filter".into()]);
//! let session_config = SessionConfig::new("redis://localhost:6379".to_string(), 3600);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [sort]
//! default_order = "asc"
//! session_key_suffix = "_sort"
//! link_class = "sort_link"
//! title_prefix = "Sort by"
//! passthrough_params = ["filter", "q"]
//!
//! [session]
//! redis_url = "redis://localhost:6379"
//! key_prefix = "sortkit"
//! ttl_seconds = 86400
//! connection_timeout_ms = 3000
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from sortkit.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./sortkit.toml";
const CONFIG_PATH_ENV: &str = "SORTKIT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sort: SortConfig,
    pub session: SessionConfig,
}

/// Sort helper configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Order used when `init` is not given one ("asc" or "desc")
    pub default_order: String,
    /// Appended to controller + action to build the session key
    pub session_key_suffix: String,
    /// Base CSS class of sort links and header cells
    pub link_class: String,
    /// Prefix of the default header cell title
    pub title_prefix: String,
    /// Request parameters carried over into sort links when present
    pub passthrough_params: Vec<String>,
}

/// Session backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Redis connection string (redis://localhost:6379)
    pub redis_url: String,
    /// Key prefix for all session entries
    pub key_prefix: String,
    /// Session lifetime in seconds, refreshed on every write
    pub ttl_seconds: u64,
    pub connection_timeout_ms: u64,
}

impl AppConfig {
    /// Load configuration from the TOML file named in the environment, or the default path
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine, a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        let config = if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH
            )))
        }?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sort.validate()?;
        self.session.validate()
    }
}

impl SortConfig {
    pub fn with_default_order(mut self, order: impl Into<String>) -> Self {
        self.default_order = order.into();
        self
    }

    pub fn with_session_key_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.session_key_suffix = suffix.into();
        self
    }

    pub fn with_link_class(mut self, class: impl Into<String>) -> Self {
        self.link_class = class.into();
        self
    }

    pub fn with_passthrough_params(mut self, params: Vec<String>) -> Self {
        self.passthrough_params = params;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let order = self.default_order.to_ascii_lowercase();
        if order != "asc" && order != "desc" {
            return Err(ConfigError::Invalid(format!(
                "Sort default_order must be 'asc' or 'desc', got '{}'",
                self.default_order
            )));
        }
        if self.link_class.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Sort link_class cannot be empty".to_string(),
            ));
        }
        if self.link_class.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid(
                "Sort link_class must be a single class name".to_string(),
            ));
        }
        if let Some(reserved) = self
            .passthrough_params
            .iter()
            .find(|p| *p == "sort_key" || *p == "sort_order")
        {
            return Err(ConfigError::Invalid(format!(
                "Passthrough parameter '{}' would shadow the sort parameters",
                reserved
            )));
        }
        Ok(())
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            default_order: "asc".to_string(),
            session_key_suffix: "_sort".to_string(),
            link_class: "sort_link".to_string(),
            title_prefix: "Sort by".to_string(),
            passthrough_params: vec!["filter".to_string(), "q".to_string()],
        }
    }
}

impl SessionConfig {
    /// Create a new session configuration
    pub fn new(redis_url: String, ttl_seconds: u64) -> Self {
        Self {
            redis_url,
            ttl_seconds,
            ..Self::default()
        }
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.redis_url.is_empty() {
            return Err(ConfigError::Invalid(
                "Redis URL cannot be empty".to_string(),
            ));
        }
        if self.key_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "Session key_prefix cannot be empty".to_string(),
            ));
        }
        if self.ttl_seconds == 0 {
            return Err(ConfigError::Invalid(
                "Session ttl_seconds must be greater than 0".to_string(),
            ));
        }
        if self.connection_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "Session connection_timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://localhost:6379".to_string(),
            key_prefix: "sortkit".to_string(),
            ttl_seconds: 86400, // 1 day
            connection_timeout_ms: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sort.session_key_suffix, "_sort");
        assert_eq!(config.sort.passthrough_params, vec!["filter", "q"]);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [sort]
            default_order = "DESC"
            "#,
        )
        .unwrap();

        assert_eq!(config.sort.default_order, "DESC");
        assert_eq!(config.sort.link_class, "sort_link");
        assert_eq!(config.session.key_prefix, "sortkit");
    }

    #[test]
    fn test_invalid_default_order_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [sort]
            default_order = "sideways"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_passthrough_cannot_shadow_sort_params() {
        let config = AppConfig {
            sort: SortConfig::default().with_passthrough_params(vec!["sort_key".into()]),
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [session]
            ttl_seconds = 0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("ttl_seconds"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::from_toml_str("[sort\nlink_class = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[session]\nredis_url = \"redis://cache:6379\"\nkey_prefix = \"app\""
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.session.redis_url, "redis://cache:6379");
        assert_eq!(config.session.key_prefix, "app");
        assert_eq!(config.session.ttl_seconds, 86400);
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_file("/definitely/not/here/sortkit.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
