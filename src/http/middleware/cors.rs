//! Cross-origin policy stage.
//!
//! # Responsibilities
//! - Emit cross-origin headers on every response, whatever the path
//! - Translate `CorsConfig` lists into a `tower_http` layer
//!
//! # Design Decisions
//! - Empty config lists mean "allow any", preserving the permissive
//!   default the browser frontend was built against
//! - Entries that fail to parse were already rejected by config
//!   validation, so they are skipped here rather than re-reported

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Build the CORS layer for the given policy.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        })
        .allow_methods(if methods.is_empty() {
            AllowMethods::any()
        } else {
            AllowMethods::list(methods)
        })
        .allow_headers(if headers.is_empty() {
            AllowHeaders::any()
        } else {
            AllowHeaders::list(headers)
        })
}
