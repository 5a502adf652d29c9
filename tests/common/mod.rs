//! Shared utilities for integration testing.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use products_backend::{HttpServer, ServerConfig, Shutdown};

/// Start a server on an ephemeral port with the given collaborator router.
///
/// Returns the bound address and the shutdown handle that keeps the server
/// task alive; dropping the handle does not stop the server, triggering it
/// does.
pub async fn start_server(config: ServerConfig, products: Router) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config, products);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    // Give the accept loop a moment to come up.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    (addr, shutdown)
}

/// Non-pooled client so each test drives fresh connections.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
