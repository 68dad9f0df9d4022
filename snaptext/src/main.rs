use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snaptext::api::{create_router, AppState};
use snaptext::config::Config;
use snaptext::ocr::OcrProvider;

#[derive(Parser)]
#[command(name = "snaptext")]
#[command(about = "Image-to-text extraction service")]
struct Args {
    /// Initialize the OCR provider, report availability, and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snaptext=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    if config.server.api_key.is_none() {
        tracing::warn!(
            "SNAPTEXT_API_KEY is not set — /process-image is locked. Set SNAPTEXT_API_KEY to enable uploads."
        );
    }

    tracing::info!("Initializing OCR provider: {}...", config.ocr.model);
    let provider = OcrProvider::new(&config.ocr)?;
    if !provider.is_available() {
        tracing::warn!("OCR unavailable - uploads will be rejected with 503");
    }

    if args.check {
        tracing::info!(available = provider.is_available(), "OCR provider check complete");
        return Ok(());
    }

    tracing::info!(
        workers = config.pool.capacity,
        timeout_secs = config.pool.job_timeout_secs,
        "Starting OCR worker pool"
    );

    let state = AppState::new(config.clone(), Arc::new(provider));
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Snaptext starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/ping", addr);
    tracing::info!("  Extraction:   http://{}/process-image", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
