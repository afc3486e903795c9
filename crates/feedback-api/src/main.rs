use std::future::IntoFuture;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use feedback_api::config::{ServerConfig, StoreBackend};
use feedback_api::state::AppState;
use feedback_storage::{FeedbackStore, MemoryFeedbackStore, S3FeedbackStore};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let store: Arc<dyn FeedbackStore> = match &config.store {
        StoreBackend::S3 { bucket } => {
            let s3 = feedback_storage::client::build_client().await;
            tracing::info!(bucket = %bucket, "using S3 feedback store");
            Arc::new(S3FeedbackStore::new(s3, bucket.clone()))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory feedback store; records are lost on exit");
            Arc::new(MemoryFeedbackStore::new())
        }
    };

    let state = AppState::new(store, config.allowed_origins.clone());
    let app = feedback_api::router(state);

    if config.lambda {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| eyre::eyre!("failed to bind {addr}: {e}"))?;
    tracing::info!(%addr, "server listening");

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => result?,
        _ = shutdown_signal() => {
            tracing::info!("shutdown requested");
            let _ = shutdown_tx.send(());
            tokio::time::timeout(SHUTDOWN_GRACE, &mut server)
                .await
                .map_err(|_| eyre::eyre!("server shutdown timed out"))??;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    #[cfg(not(unix))]
    ctrl_c.await;
}
