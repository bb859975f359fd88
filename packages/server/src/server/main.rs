// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use docext::ExtractionService;
use server_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration (reads .env first so RUST_LOG can live there too)
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| server_core::config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Document Extractor API starting up...");
    tracing::info!(
        allowed_origins = ?config.allowed_origins,
        fetch_timeout_secs = config.fetch_timeout.as_secs(),
        max_document_bytes = ?config.max_document_bytes,
        "Configuration loaded"
    );

    let extraction = ExtractionService::from_config(&config.extraction_config())
        .context("Failed to create extraction service")?;

    // Build application
    let app = build_app(&config, Arc::new(extraction));

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Status check: http://localhost:{}/status", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Document Extractor API shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
