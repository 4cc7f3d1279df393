//! CLI module for the timeseries service
//!
//! Provides command-line interface for:
//! - serve: Load config and run the HTTP server
//! - check: Validate config and print the effective settings

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{build_repository, check, run, run_command, serve};
pub use config::ServiceConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
