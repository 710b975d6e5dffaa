//! CLI module for exercise-api
//!
//! Provides command-line interface for:
//! - init: Write a default configuration file
//! - serve: Start the HTTP server

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, resolve_config, run, run_command, serve, ServeOptions};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
