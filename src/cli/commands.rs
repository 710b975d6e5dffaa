//! CLI command implementations

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::http_server::{ExerciseState, HttpServer};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Options for the serve command
#[derive(Debug, Clone, Default)]
pub struct ServeOptions {
    pub config: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_seed: bool,
}

/// Parse CLI args and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve {
            config,
            host,
            port,
            no_seed,
        } => serve(ServeOptions {
            config,
            host,
            port,
            no_seed,
        }),
    }
}

/// Write a default configuration file
pub fn init(config_path: &Path) -> CliResult<()> {
    Config::default().write_new(config_path)?;
    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}

/// Resolve the effective configuration: file (or defaults), then flags
pub fn resolve_config(opts: &ServeOptions) -> CliResult<Config> {
    let mut config = match &opts.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(host) = &opts.host {
        config.server.host = host.clone();
    }
    if let Some(port) = opts.port {
        config.server.port = port;
    }
    if opts.no_seed {
        config.seed_exercises = 0;
    }

    config.validate()?;
    Ok(config)
}

fn init_tracing(config: &Config) -> CliResult<()> {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config.env_filter()?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| CliError::boot_failed(format!("Failed to initialize logging: {}", e)))
}

/// Start the HTTP server and block until it stops
pub fn serve(opts: ServeOptions) -> CliResult<()> {
    let config = resolve_config(&opts)?;
    init_tracing(&config)?;

    tracing::info!(
        seed_exercises = config.seed_exercises,
        addr = %config.server.socket_addr(),
        "starting exercise API"
    );

    let state = Arc::new(ExerciseState::seeded(config.seed_exercises));
    let server = HttpServer::with_state(config.server, state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_config(&ServeOptions::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"server": {"host": "0.0.0.0", "port": 7000}, "seed_exercises": 5}"#,
        )
        .unwrap();

        let config = resolve_config(&ServeOptions {
            config: Some(path),
            host: None,
            port: Some(7001),
            no_seed: true,
        })
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 7001);
        assert_eq!(config.seed_exercises, 0);
    }

    #[test]
    fn test_override_is_validated() {
        let result = resolve_config(&ServeOptions {
            port: Some(0),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_init_writes_file_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exercise-api.json");

        init(&path).unwrap();
        assert!(path.exists());
        assert!(init(&path).is_err());
    }
}
