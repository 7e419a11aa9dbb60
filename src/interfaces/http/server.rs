use crate::error::{CatalogError, Result};
use axum::Router;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;
use tokio::task::JoinError;
use tracing::{error, info, warn};

/// Serves `app` until `shutdown` resolves, then drains.
///
/// Once `shutdown` fires the listener stops accepting connections and in-flight
/// requests get `grace` to finish. If they don't, the server task is aborted and
/// `CatalogError::ShutdownTimedOut` is returned.
pub async fn serve<F>(listener: TcpListener, app: Router, grace: Duration, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let addr = listener.local_addr()?;
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = stop_rx.changed().await;
    });
    let mut handle = tokio::spawn(async move { server.await });
    info!(%addr, "server is ready to handle requests");

    tokio::select! {
        joined = &mut handle => return flatten(joined),
        () = shutdown => {}
    }

    info!(?grace, "server is shutting down");
    let _ = stop_tx.send(true);

    match tokio::time::timeout(grace, &mut handle).await {
        Ok(joined) => {
            flatten(joined)?;
            info!("server stopped");
            Ok(())
        }
        Err(_) => {
            handle.abort();
            warn!(?grace, "in-flight requests outlived the grace period");
            Err(CatalogError::ShutdownTimedOut(grace))
        }
    }
}

fn flatten(joined: std::result::Result<std::io::Result<()>, JoinError>) -> Result<()> {
    match joined {
        Ok(served) => Ok(served?),
        Err(e) => Err(CatalogError::Internal(Box::new(e))),
    }
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C"),
        _ = terminate => info!("received SIGTERM"),
    }
}
