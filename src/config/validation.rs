//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{
    CacheSettings, FileSettings, LoggerSettings, ServerConfig, Settings, StorefrontConfig,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Largest page size the storefront search and RSS endpoints accept
pub const MAX_STOREFRONT_LIMIT: u32 = 200;

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Host must not be empty
    /// - Port must be between 1 and 65535
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "Host is required. Use 0.0.0.0 to listen on all interfaces.",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        Ok(())
    }
}

impl StorefrontConfig {
    /// Validate storefront configuration
    ///
    /// # Validation Rules
    /// - Base URL must be an http(s) URL
    /// - Timeouts must be greater than 0
    /// - Default country must be a two-letter code
    /// - Limits must be between 1 and 200
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                field: "storefront.base_url".to_string(),
                message: format!(
                    "Invalid storefront URL '{}'. Expected an http:// or https:// URL.",
                    self.base_url
                ),
            });
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "storefront.timeout_seconds",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "storefront.connect_timeout_seconds",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.default_country.len() != 2
            || !self.default_country.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(ConfigError::ValidationError {
                field: "storefront.default_country".to_string(),
                message: format!(
                    "Invalid country code '{}'. Expected a two-letter code such as 'cn' or 'us'.",
                    self.default_country
                ),
            });
        }

        for (field, value) in [
            ("storefront.default_limit", self.default_limit),
            ("storefront.analyze_limit", self.analyze_limit),
        ] {
            if value == 0 || value > MAX_STOREFRONT_LIMIT {
                return Err(ConfigError::ValidationError {
                    field: field.to_string(),
                    message: format!(
                        "Limit must be between 1 and {}, got {}.",
                        MAX_STOREFRONT_LIMIT, value
                    ),
                });
            }
        }

        Ok(())
    }
}

impl CacheSettings {
    /// Validate cache configuration
    ///
    /// # Validation Rules
    /// - Base TTL must be greater than 0
    /// - App TTL multiplier must be at least 1
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ttl_seconds == 0 {
            return Err(ConfigError::validation(
                "cache.ttl_seconds",
                "Cache TTL must be greater than 0 seconds.",
            ));
        }

        if self.app_ttl_multiplier == 0 {
            return Err(ConfigError::validation(
                "cache.app_ttl_multiplier",
                "App TTL multiplier must be at least 1.",
            ));
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        self.file.validate()?;

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.storefront.validate()?;
        self.cache.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_server_config_invalid_port_zero() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "server.port")
        );
    }

    #[test]
    fn test_server_config_empty_host() {
        let config = ServerConfig {
            host: "  ".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "server.host")
        );
    }

    #[test]
    fn test_storefront_config_valid() {
        assert!(StorefrontConfig::default().validate().is_ok());
    }

    #[test]
    fn test_storefront_config_invalid_url() {
        let config = StorefrontConfig {
            base_url: "ftp://itunes.apple.com".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "storefront.base_url")
        );
    }

    #[test]
    fn test_storefront_config_zero_timeout() {
        let config = StorefrontConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "storefront.timeout_seconds")
        );
    }

    #[test]
    fn test_storefront_config_bad_country() {
        for country in ["", "c", "chn", "c1"] {
            let config = StorefrontConfig {
                default_country: country.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "country should be invalid: {:?}", country);
        }
    }

    #[test]
    fn test_storefront_config_limit_bounds() {
        let config = StorefrontConfig {
            default_limit: MAX_STOREFRONT_LIMIT,
            analyze_limit: 1,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = StorefrontConfig {
            analyze_limit: MAX_STOREFRONT_LIMIT + 1,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "storefront.analyze_limit")
        );
    }

    #[test]
    fn test_cache_settings_validation() {
        assert!(CacheSettings::default().validate().is_ok());

        let zero_ttl = CacheSettings {
            ttl_seconds: 0,
            ..Default::default()
        };
        assert!(zero_ttl.validate().is_err());

        let zero_multiplier = CacheSettings {
            app_ttl_multiplier: 0,
            ..Default::default()
        };
        let err = zero_multiplier.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "cache.app_ttl_multiplier")
        );
    }

    #[test]
    fn test_logger_settings_valid_levels() {
        for level in ["trace", "debug", "info", "warn", "error", "INFO", "Debug"] {
            let settings = LoggerSettings {
                level: level.to_string(),
                ..Default::default()
            };
            assert!(settings.validate().is_ok(), "Level should be valid: {}", level);
        }
    }

    #[test]
    fn test_logger_settings_invalid_level() {
        let settings = LoggerSettings {
            level: "verbose".to_string(),
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "logger.level")
        );
    }

    #[test]
    fn test_file_settings_enabled_without_path() {
        let settings = LoggerSettings {
            file: FileSettings {
                enabled: true,
                path: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "logger.file.path")
        );
    }

    #[test]
    fn test_settings_default_is_valid() {
        assert!(Settings::default().validate().is_ok());
    }
}
