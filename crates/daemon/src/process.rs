//! Service startup and shutdown.
//!
//! `start_service` runs the HTTP API plus the mount health watcher until a
//! termination signal arrives, then performs a best-effort unmount of the
//! share before returning.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::http_server;
use crate::service_config::Config;
use crate::service_state::State as ServiceState;
use crate::share::ShareManager;

/// Run the service until SIGINT/SIGTERM. Blocks the calling task.
pub async fn start_service(config: &Config) -> anyhow::Result<()> {
    let state = ServiceState::from_config(config).await?;
    let manager = state.manager().clone();

    let (shutdown_tx, shutdown_rx) = watch::channel(());
    let watcher = tokio::spawn(run_health_watcher(
        manager.clone(),
        Duration::from_secs(config.health_check_interval_secs),
        shutdown_rx,
    ));

    let listener = tokio::net::TcpListener::bind(config.api_listen_addr).await?;
    tracing::info!(addr = %config.api_listen_addr, "API server listening");

    let app = http_server::app(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("API server stopped, shutting down");
    drop(shutdown_tx);
    let _ = watcher.await;

    // Leave no mount behind when the process exits.
    manager.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
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
        _ = ctrl_c => tracing::info!("received SIGINT"),
        _ = terminate => tracing::info!("received SIGTERM"),
    }
}

/// Periodically verify that a mounted share is still backed by an active
/// mount point. A stale mount is recorded on the share state so the status
/// endpoint surfaces it; recovery is left to the operator.
async fn run_health_watcher(
    manager: Arc<ShareManager>,
    interval: Duration,
    mut shutdown: watch::Receiver<()>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = shutdown.changed() => {
                tracing::debug!("health watcher stopping");
                return;
            }
            _ = ticker.tick() => {
                if !manager.mount_is_healthy().await {
                    tracing::warn!("mount point is no longer valid");
                    manager
                        .record_error("mount point is no longer a valid mount")
                        .await;
                }
            }
        }
    }
}
