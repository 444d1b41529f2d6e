//! Command implementations

mod config;
mod dashboard;
mod search;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Search(args) => search::execute(args, &output, config_path).await,
        Commands::Dashboard(args) => dashboard::execute(args, &output, config_path).await,
        Commands::Config => config::execute(&output, config_path),
    }
}
