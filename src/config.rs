//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::data::{DataResult, DataStore};
use crate::session::Clock;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Dashboard content configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// JSON data store; the built-in sample data when unset
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    #[serde(default = "default_demo_email")]
    pub demo_email: String,

    #[serde(default = "default_demo_password")]
    pub demo_password: String,

    /// Pin "now" for relative ages (RFC 3339)
    #[serde(default)]
    pub fixed_now: Option<DateTime<Utc>>,
}

fn default_demo_email() -> String {
    "demo@blackfangintel.com".to_string()
}

fn default_demo_password() -> String {
    "demo123".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            demo_email: default_demo_email(),
            demo_password: default_demo_password(),
            fixed_now: None,
        }
    }
}

impl DashboardConfig {
    /// The configured data file, or the built-in sample data
    pub fn load_store(&self) -> DataResult<DataStore> {
        match &self.data_file {
            Some(path) => DataStore::load(path),
            None => Ok(DataStore::sample()),
        }
    }

    pub fn clock(&self) -> Clock {
        match self.fixed_now {
            Some(now) => Clock::Fixed(now),
            None => Clock::System,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Install the global subscriber on stderr; `RUST_LOG` wins over the
    /// configured level
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("blackfang={},tower_http=info", self.level)));

        let registry = tracing_subscriber::registry().with(filter);
        if self.format == "json" {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        } else {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("blackfang").join("config.toml")),
            Some(PathBuf::from("/etc/blackfang/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("BLACKFANG_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("BLACKFANG_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid BLACKFANG_PORT {:?}", port),
            }
        }
        if let Some(data_file) = var("BLACKFANG_DATA_FILE") {
            self.dashboard.data_file = Some(PathBuf::from(data_file));
        }
        if let Some(level) = var("BLACKFANG_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("BLACKFANG_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Black Fang Intelligence Configuration
#
# Environment variables override these settings:
# - BLACKFANG_HOST
# - BLACKFANG_PORT
# - BLACKFANG_DATA_FILE
# - BLACKFANG_LOG_LEVEL
# - BLACKFANG_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 8000

# Allowed CORS origins (empty allows any origin)
cors_origins = []

[dashboard]
# JSON file with competitors, alerts, reports, profile and plans.
# The built-in sample data is used when unset.
# data_file = "/var/lib/blackfang/data.json"

# Demo account accepted by /api/auth/login
demo_email = "demo@blackfangintel.com"
demo_password = "demo123"

# Pin the clock used for "2h ago" style ages
# fixed_now = "2025-08-17T12:00:00Z"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
