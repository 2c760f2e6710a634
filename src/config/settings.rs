//! Configuration settings structures for aso-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "aso-rs".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/aso.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_storefront_base_url() -> String {
    "https://itunes.apple.com".to_string()
}

fn default_storefront_timeout() -> u64 {
    10
}

fn default_storefront_connect_timeout() -> u64 {
    5
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36".to_string()
}

fn default_country() -> String {
    "cn".to_string()
}

fn default_limit() -> u32 {
    50
}

fn default_cache_ttl() -> u64 {
    3600
}

fn default_app_ttl_multiplier() -> u32 {
    6
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ============================================================================
// Storefront Configuration
// ============================================================================

/// Upstream storefront lookup API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Base URL of the storefront API (search, lookup and RSS feeds)
    #[serde(default = "default_storefront_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_storefront_timeout")]
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    #[serde(default = "default_storefront_connect_timeout")]
    pub connect_timeout_seconds: u64,

    /// User-Agent sent with every upstream request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Country used when a request does not name one
    #[serde(default = "default_country")]
    pub default_country: String,

    /// Result limit used when a request does not name one
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Number of search results fetched per keyword during analysis
    #[serde(default = "default_limit")]
    pub analyze_limit: u32,
}

impl StorefrontConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: default_storefront_base_url(),
            timeout_seconds: default_storefront_timeout(),
            connect_timeout_seconds: default_storefront_connect_timeout(),
            user_agent: default_user_agent(),
            default_country: default_country(),
            default_limit: default_limit(),
            analyze_limit: default_limit(),
        }
    }
}

// ============================================================================
// Cache Configuration
// ============================================================================

/// Response cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Base time-to-live in seconds (search and rankings)
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,

    /// App detail entries live this many times longer than the base TTL
    #[serde(default = "default_app_ttl_multiplier")]
    pub app_ttl_multiplier: u32,

    /// Serialize concurrent fetches for the same cache key
    #[serde(default = "default_true")]
    pub single_flight: bool,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_seconds: default_cache_ttl(),
            app_ttl_multiplier: default_app_ttl_multiplier(),
            single_flight: default_true(),
        }
    }
}

// ============================================================================
// Logger Settings (compatible with LoggerConfig)
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to the runtime LoggerConfig
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console_config = self.console.into_console_config();
        let file_config = self.file.into_file_config()?;

        LoggerConfig::new(console_config, file_config, self.level).map_err(|e| {
            ConfigError::ValidationError {
                field: "logger".to_string(),
                message: e.to_string(),
            }
        })
    }
}

impl ConsoleSettings {
    pub fn into_console_config(self) -> ConsoleConfig {
        ConsoleConfig::new(self.enabled, self.colored)
    }
}

impl FileSettings {
    pub fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format = self.parse_format()?;

        FileConfig::new(self.enabled, PathBuf::from(self.path), self.append, format).map_err(
            |e| ConfigError::ValidationError {
                field: "logger.file".to_string(),
                message: e.to_string(),
            },
        )
    }

    fn parse_format(&self) -> Result<LogFormat, ConfigError> {
        self.format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: e.to_string(),
            })
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,

    /// Upstream storefront configuration
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Response cache configuration
    #[serde(default)]
    pub cache: CacheSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_server_config() -> impl Strategy<Value = ServerConfig> {
        (
            prop_oneof![
                Just("127.0.0.1".to_string()),
                Just("0.0.0.0".to_string()),
                Just("localhost".to_string()),
            ],
            1u16..=65535,
        )
            .prop_map(|(host, port)| ServerConfig { host, port })
    }

    fn arb_cache_settings() -> impl Strategy<Value = CacheSettings> {
        (1u64..=86_400, 1u32..=24, any::<bool>()).prop_map(
            |(ttl_seconds, app_ttl_multiplier, single_flight)| CacheSettings {
                ttl_seconds,
                app_ttl_multiplier,
                single_flight,
            },
        )
    }

    fn arb_settings() -> impl Strategy<Value = Settings> {
        (arb_server_config(), arb_cache_settings()).prop_map(|(server, cache)| Settings {
            server,
            cache,
            ..Settings::default()
        })
    }

    proptest! {
        #[test]
        fn prop_settings_round_trip_serialization(settings in arb_settings()) {
            let json = serde_json::to_string(&settings).unwrap();
            let restored: Settings = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(settings, restored);
        }
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_storefront_config_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.base_url, "https://itunes.apple.com");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.default_country, "cn");
        assert_eq!(config.default_limit, 50);
        assert_eq!(config.analyze_limit, 50);
    }

    #[test]
    fn test_cache_settings_defaults() {
        let config = CacheSettings::default();
        assert_eq!(config.ttl_seconds, 3600);
        assert_eq!(config.app_ttl_multiplier, 6);
        assert!(config.single_flight);
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let json = r#"{ "server": { "port": 8080 }, "cache": { "ttl_seconds": 60 } }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.cache.ttl_seconds, 60);
        assert_eq!(settings.cache.app_ttl_multiplier, 6);
        assert_eq!(settings.storefront, StorefrontConfig::default());
    }

    #[test]
    fn test_logger_settings_into_logger_config() {
        let settings = LoggerSettings {
            level: "debug".to_string(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        };
        let config = settings.into_logger_config().unwrap();
        assert_eq!(config.level, "debug");
        assert!(config.console.enabled);
        assert!(!config.file.enabled);
    }

    #[test]
    fn test_file_settings_invalid_format() {
        let settings = FileSettings {
            format: "xml".to_string(),
            ..FileSettings::default()
        };
        let result = settings.into_file_config();
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { ref field, .. }) if field == "logger.file.format"
        ));
    }

    #[test]
    fn test_logger_settings_both_disabled() {
        let settings = LoggerSettings {
            level: "info".to_string(),
            console: ConsoleSettings {
                enabled: false,
                colored: false,
            },
            file: FileSettings::default(),
        };
        assert!(settings.into_logger_config().is_err());
    }
}
