//! Black Fang Intelligence Server
//!
//! Run with: cargo run --bin blackfang
//!
//! # Configuration
//!
//! Read from `--config`, or the first of `~/.config/blackfang/config.toml`,
//! `/etc/blackfang/config.toml` and `./config.toml`. Environment variables
//! override the file:
//! - `BLACKFANG_HOST`, `BLACKFANG_PORT`
//! - `BLACKFANG_DATA_FILE`
//! - `BLACKFANG_LOG_LEVEL`, `BLACKFANG_LOG_FORMAT`
//! - `RUST_LOG`: full filter, takes precedence over the log level

use anyhow::Context;
use blackfang::api::{serve, ApiConfig, AppState};
use blackfang::config::Config;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "blackfang")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the Black Fang Intelligence dashboard")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on, overriding the config
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }

    config.logging.init_tracing();
    tracing::info!(
        "Starting Black Fang Intelligence v{}",
        env!("CARGO_PKG_VERSION")
    );

    let store = config
        .dashboard
        .load_store()
        .context("Failed to load dashboard data")?;
    match &config.dashboard.data_file {
        Some(path) => tracing::info!("Dashboard data: {:?}", path),
        None => tracing::info!("Dashboard data: built-in sample"),
    }
    if let Some(now) = config.dashboard.fixed_now {
        tracing::info!("Clock pinned at {}", now.to_rfc3339());
    }

    let api_config = ApiConfig::from_config(&config);
    let state = AppState::new(Arc::new(store), config.dashboard.clock(), api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Black Fang Intelligence stopped");
    Ok(())
}
