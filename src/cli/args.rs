//! CLI argument definitions using clap
//!
//! Commands:
//! - timeseries-api serve --config <path> [--port <port>]
//! - timeseries-api check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// REST service for daily time-series tick records
#[derive(Parser, Debug)]
#[command(name = "timeseries-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./timeseries.json")]
        config: PathBuf,

        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate the configuration and print the effective settings
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./timeseries.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
