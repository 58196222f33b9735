//! Server binary: load the model once, then serve until shutdown.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use glotserve_core::LanguageIdentifier;
use glotserve_model::{FastTextDetector, ensure_model_file};
use glotserve_server::{AppState, ServerConfig, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("glotserve=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::parse();
    info!("glotserve v{}", env!("CARGO_PKG_VERSION"));

    // One load attempt: a failure leaves the service running but unready,
    // answering 503 until a restart finds a loadable model.
    let identifier = match load_model(&config).await {
        Ok(model) => {
            info!("model initialised, service ready");
            LanguageIdentifier::ready(model)
        }
        Err(err) => {
            error!("model initialisation failed, serving unready: {err:#}");
            LanguageIdentifier::not_ready()
        }
    };

    let state = Arc::new(AppState::new(identifier));
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn load_model(config: &ServerConfig) -> anyhow::Result<Arc<FastTextDetector>> {
    let path = ensure_model_file(&config.model_path, &config.cache_dir)
        .await
        .context("model file unavailable")?;
    let detector = FastTextDetector::load(&path).context("model load failed")?;
    Ok(Arc::new(detector))
}

/// Wait for ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::warn!("SIGTERM handler unavailable, ctrl-c only: {err}");
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

    info!("shutdown signal received");
}
