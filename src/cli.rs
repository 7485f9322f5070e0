//! CLI definitions for EyesBot MCP.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// EyesBot MCP CLI.
#[derive(Parser)]
#[command(name = "eyesbot-mcp")]
#[command(about = "MCP server exposing a robot's local HTTP API")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "EYESBOT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Serve MCP over stdio until stdin closes (default)
    Serve,

    /// Fetch each robot endpoint once and report the outcome
    Probe,
}
