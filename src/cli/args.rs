//! CLI argument definitions using clap
//!
//! Commands:
//! - exercise-api init --config <path>
//! - exercise-api serve [--config <path>] [--host <host>] [--port <port>] [--no-seed]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// exercise-api - In-memory exercise CRUD service
#[derive(Parser, Debug)]
#[command(name = "exercise-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./exercise-api.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file (built-in defaults when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port
        #[arg(long)]
        port: Option<u16>,

        /// Start with an empty collection instead of demo exercises
        #[arg(long)]
        no_seed: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
