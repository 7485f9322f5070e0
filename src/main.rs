//! EyesBot MCP - robot capabilities for MCP clients
//!
//! Main entry point for the stdio server and the probe diagnostic.

mod cli;
mod cmd_probe;
mod server;

use clap::Parser;

use eyesbot_config::ConfigLoader;

use crate::cli::{Cli, Commands};
use crate::cmd_probe::handle_probe_command;
use crate::server::{init_tracing, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = ConfigLoader::resolve(cli.config.as_deref())?;

    let _guard = init_tracing(&config.logging)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config).await,
        Commands::Probe => handle_probe_command(&config.robot).await,
    }
}
