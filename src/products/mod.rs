//! Products collaborator stub.
//!
//! The products service is owned by an external module whose source is not
//! part of this repo. Until it lands, this stub satisfies the mount
//! contract: it accepts every method and path under the prefix and answers
//! 501 so callers can tell "wired but unimplemented" from a routing 404.
//!
//! The server takes any `Router` as the collaborator, so swapping the real
//! implementation in (or a test double) does not touch the entry point.

use axum::{http::StatusCode, response::IntoResponse, routing::any, Json, Router};
use serde_json::json;

/// Build the stub products router.
pub fn router() -> Router {
    Router::new()
        .route("/", any(not_implemented))
        .route("/{*path}", any(not_implemented))
}

async fn not_implemented() -> impl IntoResponse {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({ "error": "products service not implemented" })),
    )
}
