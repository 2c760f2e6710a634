use clap::Parser;

use aso_rs::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (settings, environment) = load_and_merge_config(&cli)?;

    if !cli.is_dry_run() {
        init_logger_from_settings(&settings)?;
    }

    execute_command(&cli, settings, environment).await
}
