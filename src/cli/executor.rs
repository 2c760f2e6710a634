//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::ServeCommandHandler;
use super::parser::{Cli, Commands};
use crate::config::{Environment, settings::Settings};

/// Execute a CLI command with the given settings
///
/// No subcommand means `serve`. Runs until the server shuts down, or
/// returns right after validation for `serve --dry-run`.
pub async fn execute_command(
    cli: &Cli,
    settings: Settings,
    environment: Environment,
) -> anyhow::Result<()> {
    let handler = ServeCommandHandler::new(settings, environment);

    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) => handler.execute(*dry_run).await,
        None => handler.execute(false).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[tokio::test]
    async fn test_execute_serve_dry_run() {
        let cli = Cli::try_parse_from(["aso-rs", "serve", "--dry-run"]).unwrap();
        let result = execute_command(&cli, Settings::default(), Environment::Test).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_dry_run_rejects_invalid_settings() {
        let cli = Cli::try_parse_from(["aso-rs", "serve", "--dry-run"]).unwrap();
        let mut settings = Settings::default();
        settings.cache.ttl_seconds = 0;

        let result = execute_command(&cli, settings, Environment::Test).await;
        assert!(result.is_err());
    }
}
