//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router
//! - Wire up middleware (tracing, request ID, timeout, CORS, JSON body)
//! - Mount the products collaborator under its path prefix
//! - Serve on a caller-supplied listener with graceful shutdown
//!
//! # Middleware Order
//! Layers execute outermost-first. For each request the order is:
//! request ID → trace → timeout → CORS → JSON body → routing. The CORS
//! stage wraps the whole router, so its headers also appear on fallback
//! 404 responses.

use std::time::Duration;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::middleware::{cors_layer, json_body_middleware};

/// Path prefix under which the products collaborator is mounted.
///
/// The prefix is stripped before the collaborator sees the path: a request
/// for `/api/products/42` reaches the collaborator as `/42`.
pub const PRODUCTS_PREFIX: &str = "/api/products";

/// HTTP server for the products backend.
///
/// The server is an explicitly constructed value: `main` builds one, and
/// tests build their own with stub collaborators. There is no global
/// application instance.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and
    /// collaborator router.
    pub fn new(config: ServerConfig, products: Router) -> Self {
        let router = Self::build_router(&config, products);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Axum applies layers bottom-up, so the last `.layer` call is the
    /// outermost stage.
    fn build_router(config: &ServerConfig, products: Router) -> Router {
        Router::new()
            .nest(PRODUCTS_PREFIX, products)
            .layer(middleware::from_fn_with_state(
                config.limits.max_body_bytes,
                json_body_middleware,
            ))
            .layer(cors_layer(&config.cors))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
