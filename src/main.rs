use clap::Parser;
use portal::cli::Cli;
use portal::commands;
use portal::config::Settings;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout carries command output
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    // Load configuration (file, then CLI/env overrides)
    let settings = Settings::new_with_cli(&cli)?;
    info!(
        config = %cli.config.display(),
        storage = %settings.storage.path.display(),
        "Starting portal"
    );

    commands::run(&cli.command, &settings).await
}
