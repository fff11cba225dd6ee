//! hush CLI binary entrypoint.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hush_cli::cli::{Cli, Commands};
use hush_cli::commands::SilenceCommand;
use hush_cli::error::CliError;
use hush_silence::parse_duration;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let deadline = parse_duration(&cli.timeout)
        .map_err(|e| CliError::Config(format!("invalid timeout: {e}")))?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Silence { command } => {
            let cmd = SilenceCommand::new(&cli.alertmanager_url, deadline);
            cmd.execute(&mut stdout, &command).await?;
        }
    }

    Ok(())
}
