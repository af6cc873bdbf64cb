//! Shutdown signal handling for the daemon binary.

use tracing::info;

/// Resolves when the process receives a shutdown signal.
///
/// On Unix this is SIGTERM or SIGINT; elsewhere, Ctrl-C.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(_) => {
                // No SIGTERM stream; fall back to Ctrl-C alone.
                let _ = tokio::signal::ctrl_c().await;
                info!("received ctrl-c, shutting down");
                return;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => info!("received SIGTERM, shutting down"),
            _ = tokio::signal::ctrl_c() => info!("received ctrl-c, shutting down"),
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        info!("received ctrl-c, shutting down");
    }
}
