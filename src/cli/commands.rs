//! CLI command implementations
//!
//! `start` assembles the store, translator and server, then blocks on a
//! tokio runtime built here; nothing async leaks into `main`.

use std::path::PathBuf;

use crate::analysis::StringProperties;
use crate::http_server::{ApiServer, ServerConfig};
use crate::nl::RuleTranslator;
use crate::store::MemoryStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the requested command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Start { config, port } => start(config, port),
        Command::Analyze { value } => analyze(&value),
    }
}

/// Boot the HTTP server and serve until shutdown
pub fn start(config_path: PathBuf, port: Option<u16>) -> CliResult<()> {
    init_tracing();

    let mut config = if config_path.exists() {
        ServerConfig::from_file(&config_path)?
    } else {
        ServerConfig::default()
    };
    if let Some(port) = port {
        config.port = port;
    }

    let server = ApiServer::new(MemoryStore::new(), RuleTranslator::new());

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot(format!("failed to create tokio runtime: {}", e)))?;
    rt.block_on(server.serve(config))?;
    Ok(())
}

/// One-shot: compute and print the property bundle for a value
pub fn analyze(value: &str) -> CliResult<()> {
    let properties = StringProperties::compute(value);
    println!("{}", serde_json::to_string_pretty(&properties)?);
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
