//! OS signal wiring.

use crate::lifecycle::shutdown::Shutdown;

/// Trigger the shutdown coordinator when the process receives Ctrl+C.
///
/// Spawned once from `main`; tests trigger shutdown directly instead.
pub fn trigger_on_ctrl_c(shutdown: Shutdown) {
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("Shutdown signal received");
        shutdown.trigger();
    });
}
