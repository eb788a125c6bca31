//! opdb CLI - Main entry point

use clap::Parser;
use opdb_cli::{Cli, Commands};
use opdb_common::logging::{init_logging, LogConfig, LogLevel};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging from the environment; --verbose raises the level
    let mut log_config = LogConfig::from_env().unwrap_or_else(|_| {
        LogConfig::builder()
            .log_file_prefix("opdb".to_string())
            .build()
    });
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }

    // The CLI should still work if logging cannot be initialized
    let _ = init_logging(&log_config);

    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> opdb_cli::Result<()> {
    match &cli.command {
        Commands::Fetch { accession, output } => {
            opdb_cli::commands::fetch::run(
                accession,
                output,
                cli.uniprot_url.clone(),
                cli.pdb_url.clone(),
            )
            .await
        },
    }
}
