//! `seal-svc` — binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from the environment (and optional YAML file).
//! 2. Initialise the telemetry pipeline (tracing + optional OTLP export).
//! 3. Build the Axum router and serve until SIGINT / SIGTERM.

use anyhow::{Context, Result};
use tracing::info;

use seal_svc::config::Config;
use seal_svc::server::{self, settings::RouterSettings};
use seal_svc::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::load().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init_telemetry(
        cfg.otel_exporter_otlp_endpoint.as_deref(),
        cfg.effective_log_level(),
        cfg.debug,
    )?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cfg.port,
        base_path = %cfg.base_path,
        debug = cfg.debug,
        "seal-svc starting"
    );

    // -----------------------------------------------------------------------
    // 3. HTTP server
    // -----------------------------------------------------------------------
    let router = server::router::build(&RouterSettings::from(&cfg));

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await
        .context("server error")?;

    telemetry::shutdown_telemetry();
    info!("seal-svc stopped");
    Ok(())
}
