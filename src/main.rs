//! In-memory key-value store over HTTP.
//!
//! Serves `/data` and `/stats`, logs a status line on a fixed interval and
//! shuts down gracefully on SIGINT/SIGTERM.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;

use kv_server::config::{load_config, validate_config, ConfigError, KvConfig};
use kv_server::lifecycle::{wait_for_signal, Shutdown};
use kv_server::observability::{logging, metrics};
use kv_server::{HttpServer, Reporter, Store};

#[derive(Parser)]
#[command(name = "kv-server")]
#[command(about = "In-memory key-value store over HTTP", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

impl Cli {
    fn load(&self) -> Result<KvConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => KvConfig::default(),
        };
        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
            validate_config(&config).map_err(ConfigError::Validation)?;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => {
            logging::init_logging("info");
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "kv-server starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        reporter_interval_secs = config.reporter.interval_secs,
        request_timeout_secs = config.limits.request_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Failing to bind is the only fatal runtime condition.
    let listener = match TcpListener::bind(&config.listener.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(
                bind_address = %config.listener.bind_address,
                error = %e,
                "Failed to bind listener"
            );
            return ExitCode::FAILURE;
        }
    };

    let store = Arc::new(Store::new());
    let shutdown = Shutdown::new();

    let reporter = Reporter::from_config(store.clone(), &config.reporter);
    let reporter_task = tokio::spawn(reporter.run(shutdown.subscribe()));

    let server = HttpServer::new(&config, store);
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    match wait_for_signal().await {
        Ok(signal) => tracing::info!(%signal, "Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to install signal handlers, waiting for Ctrl+C");
            if let Err(e) = tokio::signal::ctrl_c().await {
                // Nothing can stop the server cleanly now; keep serving.
                tracing::error!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("Shutting down server");
    shutdown.trigger();

    let drain_timeout = Duration::from_secs(config.shutdown.drain_timeout_secs);
    match tokio::time::timeout(drain_timeout, async {
        tokio::join!(reporter_task, server_task)
    })
    .await
    {
        Ok((reporter_res, server_res)) => {
            if let Err(e) = reporter_res {
                tracing::error!(error = %e, "Reporter task failed");
            }
            match server_res {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::error!(error = %e, "HTTP server error"),
                Err(e) => tracing::error!(error = %e, "HTTP server task failed"),
            }
        }
        Err(_) => tracing::warn!(
            timeout_secs = config.shutdown.drain_timeout_secs,
            "Shutdown drain timed out, abandoning in-flight work"
        ),
    }

    tracing::info!("Server gracefully stopped");
    ExitCode::SUCCESS
}
