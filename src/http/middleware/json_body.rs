//! JSON body-parsing stage.
//!
//! # Responsibilities
//! - Buffer and parse bodies whose `Content-Type` indicates JSON
//! - Attach the parsed value to the request for downstream handlers
//! - Reject malformed payloads with 400 and oversized ones with 413,
//!   without taking the process down
//!
//! # Design Decisions
//! - Non-JSON requests pass through untouched (streaming preserved)
//! - The original bytes are restored as the request body, so handlers
//!   may still use their own extractors instead of the extension
//! - An empty JSON-typed body is treated as "no body", not a parse error

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// Parsed JSON request body, available to handlers as an extension.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl JsonBody {
    /// The parsed value.
    pub fn value(&self) -> &Value {
        &self.0
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            v.trim()
                .to_ascii_lowercase()
                .starts_with("application/json")
        })
        .unwrap_or(false)
}

/// Middleware stage parsing JSON request bodies.
///
/// The state carries the maximum accepted body size in bytes.
pub async fn json_body_middleware(
    State(max_body_bytes): State<usize>,
    request: Request,
    next: Next,
) -> Response {
    if !is_json(request.headers()) {
        return next.run(request).await;
    }

    // Cheap reject before buffering when the client declares its size.
    if let Some(declared) = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok())
    {
        if declared > max_body_bytes {
            return payload_too_large(max_body_bytes);
        }
    }

    let (mut parts, body) = request.into_parts();
    let bytes: Bytes = match axum::body::to_bytes(body, max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(_) => return payload_too_large(max_body_bytes),
    };

    if !bytes.is_empty() {
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => {
                parts.extensions.insert(JsonBody(value));
            }
            Err(e) => {
                tracing::debug!(error = %e, "Rejecting malformed JSON body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("invalid JSON body: {e}") })),
                )
                    .into_response();
            }
        }
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    next.run(request).await
}

fn payload_too_large(max_body_bytes: usize) -> Response {
    (
        StatusCode::PAYLOAD_TOO_LARGE,
        Json(json!({ "error": format!("body exceeds {max_body_bytes} bytes") })),
    )
        .into_response()
}
