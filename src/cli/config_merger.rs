//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Environment, settings::Settings};

/// Configuration merger that handles CLI argument integration with file-based configuration
///
/// CLI arguments override everything loaded from files and environment
/// variables, including `PORT`.
#[derive(Debug)]
pub struct ConfigurationMerger {
    base_config: Settings,
    environment: Environment,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings, environment: Environment) -> Self {
        Self {
            base_config,
            environment,
        }
    }

    /// Load the base configuration the way the CLI asks for it
    ///
    /// `--config` selects a single file; otherwise the layered loader is
    /// used. `--env` replaces `ASO_APP_ENV` in both cases.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match cli.config.as_ref() {
            Some(path) => ConfigLoader::from_file(path),
            None => ConfigLoader::new()?,
        };
        let loader = match cli.env {
            Some(env) => loader.with_environment(env.into()),
            None => loader,
        };

        let config = loader.load()?;
        Ok(Self::new(config, loader.environment()))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// Precedence, lowest to highest: files/env vars, global flags
    /// (`--verbose`/`--quiet`), `serve` options.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        Self::apply_global_overrides(&mut config, cli);

        if let Some(ref command) = cli.command {
            Self::apply_command_overrides(&mut config, command);
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_global_overrides(config: &mut Settings, cli: &Cli) {
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }
    }

    fn apply_command_overrides(config: &mut Settings, command: &Commands) {
        match command {
            Commands::Serve {
                host,
                port,
                log_level,
                dry_run: _,
            } => {
                if let Some(host_addr) = host {
                    config.server.host = host_addr.clone();
                }
                if let Some(port_num) = port {
                    config.server.port = *port_num;
                }
                if let Some(level) = log_level {
                    config.logger.level = (*level).into();
                }
            }
        }
    }

    /// The environment whose file was layered into the base configuration
    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::Cli;
    use crate::config::loader::tests::{EnvGuard, TEST_MUTEX};
    use clap::Parser;
    use std::fs;

    fn merger() -> ConfigurationMerger {
        ConfigurationMerger::new(Settings::default(), Environment::Development)
    }

    #[test]
    fn test_merge_without_flags_keeps_base() {
        let cli = Cli::try_parse_from(["aso-rs"]).unwrap();
        let merged = merger().merge_cli_args(&cli).unwrap();
        assert_eq!(&merged, merger().config());
    }

    #[test]
    fn test_merge_verbose_flag() {
        let cli = Cli::try_parse_from(["aso-rs", "--verbose"]).unwrap();
        assert_eq!(merger().merge_cli_args(&cli).unwrap().logger.level, "debug");
    }

    #[test]
    fn test_merge_quiet_flag() {
        let cli = Cli::try_parse_from(["aso-rs", "--quiet"]).unwrap();
        assert_eq!(merger().merge_cli_args(&cli).unwrap().logger.level, "error");
    }

    #[test]
    fn test_merge_serve_host_and_port() {
        let cli = Cli::try_parse_from(["aso-rs", "serve", "--host", "127.0.0.1", "--port", "8080"])
            .unwrap();
        let merged = merger().merge_cli_args(&cli).unwrap();
        assert_eq!(merged.server.host, "127.0.0.1");
        assert_eq!(merged.server.port, 8080);
    }

    #[test]
    fn test_command_log_level_overrides_global() {
        let cli = Cli::try_parse_from(["aso-rs", "--verbose", "serve", "--log-level", "warn"])
            .unwrap();
        assert_eq!(merger().merge_cli_args(&cli).unwrap().logger.level, "warn");
    }

    #[test]
    fn test_from_cli_with_config_file_and_env() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::clean();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aso.toml");
        fs::write(&path, "[server]\nport = 6100\n\n[cache]\nttl_seconds = 60\n").unwrap();

        let cli = Cli::try_parse_from([
            "aso-rs",
            "--config",
            path.to_str().unwrap(),
            "--env",
            "production",
        ])
        .unwrap();
        let merger = ConfigurationMerger::from_cli(&cli).unwrap();

        assert_eq!(merger.environment(), Environment::Production);
        assert_eq!(merger.config().cache.ttl_seconds, 60);
    }
}
