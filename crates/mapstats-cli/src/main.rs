//! Mapstats CLI - Command-line interface
//!
//! Runs the place search and the admission dashboard from a terminal.

mod cli;
mod commands;
mod config_loader;
mod errors;
mod interactive;
mod output;
mod output_types;
mod progress;
mod sinks;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize tracing; pipeline failures are reported at error level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Create async runtime and execute the command
    let result = tokio::runtime::Runtime::new()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| runtime.block_on(commands::execute(cli)));

    if let Err(err) = result {
        errors::from_anyhow(err).display();
        std::process::exit(1);
    }
}
