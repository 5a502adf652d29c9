//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, body limit > 0)
//! - Check the bind address and CORS lists parse into their runtime types
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::{HeaderName, HeaderValue, Method};
use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The listener bind address is not a valid socket address.
    #[error("invalid bind address {0:?}")]
    InvalidBindAddress(String),

    /// A configured CORS origin is not a valid header value.
    #[error("invalid CORS origin {0:?}")]
    InvalidOrigin(String),

    /// A configured CORS method is not a valid HTTP method.
    #[error("invalid CORS method {0:?}")]
    InvalidMethod(String),

    /// A configured CORS header is not a valid header name.
    #[error("invalid CORS header {0:?}")]
    InvalidHeader(String),

    /// The body limit is zero, which would reject every request with a body.
    #[error("limits.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    /// The request timeout is zero, which would time out every request.
    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    for origin in &config.cors.allowed_origins {
        if origin.parse::<HeaderValue>().is_err() {
            errors.push(ValidationError::InvalidOrigin(origin.clone()));
        }
    }
    for method in &config.cors.allowed_methods {
        if method.parse::<Method>().is_err() {
            errors.push(ValidationError::InvalidMethod(method.clone()));
        }
    }
    for header in &config.cors.allowed_headers {
        if header.parse::<HeaderName>().is_err() {
            errors.push(ValidationError::InvalidHeader(header.clone()));
        }
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
