//! Products API backend library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod products;

pub use config::ServerConfig;
pub use http::{HttpServer, JsonBody, PRODUCTS_PREFIX};
pub use lifecycle::Shutdown;
