//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, listener, graceful shutdown)
//!     → middleware/cors.rs (cross-origin headers on every response)
//!     → middleware/json_body.rs (parse JSON bodies, 4xx on bad input)
//!     → products router mounted at /api/products (prefix stripped)
//!     → Send response to client
//! ```

pub mod middleware;
pub mod server;

pub use middleware::JsonBody;
pub use server::{HttpServer, PRODUCTS_PREFIX};
