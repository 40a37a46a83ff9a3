use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;

use lcu_discovery::{DiscoveryConfig, DiscoveryEngine};

/// Probe the local League client and print its API credentials as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Keep polling until the client appears instead of failing immediately
    #[arg(short, long)]
    wait: bool,

    /// Delay between attempts in milliseconds (with --wait)
    #[arg(long, default_value_t = 2500, value_name = "MS")]
    poll_interval_ms: u64,

    /// PEM file whose contents override the default trust certificate
    #[arg(long, value_name = "FILE")]
    certificate: Option<PathBuf>,

    /// Attach the default trust certificate instead of running unsafe
    #[arg(long)]
    secure: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    initialize_logging(args.debug)?;

    let certificate_override = match &args.certificate {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read certificate file {}", path.display()))?,
        ),
        None => None,
    };

    let config = DiscoveryConfig {
        await_connection: args.wait,
        poll_interval: Duration::from_millis(args.poll_interval_ms),
        certificate_override,
        unsafe_mode: !args.secure,
        certificate_path: None,
    };

    if args.wait {
        info!(
            "Waiting for the League client (polling every {} ms, Ctrl+C to stop)",
            args.poll_interval_ms
        );
    }

    let cancel = CancellationToken::new();
    let engine = DiscoveryEngine::new();

    let credentials = tokio::select! {
        result = engine.discover_with_cancel(&config, cancel.clone()) => {
            result.context("Discovery failed")?
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, stopping discovery");
            cancel.cancel();
            return Ok(());
        }
    };

    info!(
        "Found League client (PID {}) on port {}",
        credentials.process_id, credentials.port
    );
    println!("{}", serde_json::to_string_pretty(&credentials)?);

    Ok(())
}

fn initialize_logging(debug: bool) -> Result<()> {
    let level = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
