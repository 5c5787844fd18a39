//! CLI entry point - the composition root.
//!
//! This is the only place where infrastructure is wired together: the
//! environment is read, settings are assembled, the documentation server is
//! constructed, and control is handed to the serving layer. Configuration
//! errors surface here as a readable message and a non-zero exit, before
//! any logging is initialized or any socket is bound.

use std::sync::Arc;

use clap::Parser;
use mcpdoc_axum::start_server;
use mcpdoc_core::{ServerSettings, SystemEnv};
use mcpdoc_mcp::McpDocServer;
use tracing_subscriber::EnvFilter;

/// Host llms.txt documentation over the Model Context Protocol.
#[derive(Parser, Debug)]
#[command(name = "mcpdoc", version, about)]
struct Cli {
    /// Load environment variables from this file before reading configuration.
    #[arg(long, value_name = "PATH")]
    env_file: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    let settings = ServerSettings::from_env(&SystemEnv)?;

    // Initialize logging at the configured verbosity. Diagnostics go to
    // stderr; the lowercased LOG_LEVEL value feeds the filter.
    let filter = EnvFilter::try_new(settings.log_level.to_lowercase())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let server = Arc::new(McpDocServer::new(&settings));
    start_server(settings, server).await
}
