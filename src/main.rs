//! Products API backend.
//!
//! HTTP entry point for the products service. Built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌────────────────────────────────────────────┐
//!                        │              PRODUCTS BACKEND              │
//!                        │                                            │
//!   Client Request       │  ┌──────────┐   ┌──────────┐   ┌────────┐  │
//!   ─────────────────────┼─▶│   CORS   │──▶│JSON body │──▶│products│  │
//!                        │  │  stage   │   │  stage   │   │ router │  │
//!                        │  └──────────┘   └──────────┘   └────────┘  │
//!                        │                                            │
//!                        │  ┌──────────────────────────────────────┐  │
//!                        │  │        Cross-Cutting Concerns        │  │
//!                        │  │  config · tracing · request IDs ·    │  │
//!                        │  │  timeouts · graceful shutdown        │  │
//!                        │  └──────────────────────────────────────┘  │
//!                        └────────────────────────────────────────────┘
//! ```
//!
//! The products router itself is an external collaborator mounted under
//! `/api/products`; see `products::router` for the stub standing in for it.

use std::path::Path;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use products_backend::config::load_config_or_default;
use products_backend::lifecycle::signals;
use products_backend::{HttpServer, Shutdown};

/// Config file read at startup when present. No CLI arguments are parsed.
const CONFIG_PATH: &str = "server.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "products_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("products-backend v0.1.0 starting");

    let config = load_config_or_default(Path::new(CONFIG_PATH))?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_body_bytes = config.limits.max_body_bytes,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind before serving: a taken port must fail the process, not retry.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(url = %format!("http://{}", local_addr), "Backend listening");

    let shutdown = Shutdown::new();
    signals::trigger_on_ctrl_c(shutdown.clone());

    let server = HttpServer::new(config, products_backend::products::router());
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
