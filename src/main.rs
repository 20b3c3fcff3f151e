use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use salary_engine::api::{AppState, create_router};
use salary_engine::engine::PayrollEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serve the salary engine over HTTP.
///
/// Without `--config` the engine starts from the built-in defaults: six
/// income items, social insurance, housing fund and the progressive income
/// tax table.
#[derive(Parser, Debug)]
#[command(name = "salary-engine")]
#[command(version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Initial configuration file (.json, .yaml or .yml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut engine = PayrollEngine::new();
    if let Some(path) = &args.config {
        engine
            .import_config_from_file(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display()))?;
    }

    let listener = tokio::net::TcpListener::bind(&args.addr)
        .await
        .with_context(|| format!("Failed to bind: {}", args.addr))?;
    info!(addr = %args.addr, "Salary engine listening");

    axum::serve(listener, create_router(AppState::new(engine)))
        .await
        .context("Server failed")?;
    Ok(())
}
