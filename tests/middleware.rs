//! Middleware tests through the full server: cross-origin headers on every
//! response and JSON body handling end to end.

use axum::{routing::post, Extension, Json, Router};
use serde_json::{json, Value};

use products_backend::{JsonBody, ServerConfig};

mod common;

/// Collaborator that echoes the parsed JSON body it received, or null when
/// the parsing stage attached nothing.
fn json_echo_router() -> Router {
    async fn echo(body: Option<Extension<JsonBody>>) -> Json<Value> {
        match body {
            Some(Extension(parsed)) => Json(parsed.0),
            None => Json(Value::Null),
        }
    }
    Router::new().route("/", post(echo))
}

#[tokio::test]
async fn cors_headers_are_present_on_every_response() {
    let (addr, shutdown) = common::start_server(ServerConfig::default(), json_echo_router()).await;
    let client = common::client();

    // Matched route, unmatched route, and a method the collaborator does
    // not handle: all carry the permissive CORS header.
    for (method, path, expected_status) in [
        (reqwest::Method::POST, "/api/products", 200),
        (reqwest::Method::GET, "/definitely/not/mounted", 404),
        (reqwest::Method::GET, "/api/products", 405),
    ] {
        let response = client
            .request(method.clone(), format!("http://{}{}", addr, path))
            .header("origin", "http://localhost:3000")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), expected_status, "{} {}", method, path);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .expect("CORS header missing"),
            "*"
        );
    }

    shutdown.trigger();
}

#[tokio::test]
async fn configured_origins_narrow_the_policy() {
    let mut config = ServerConfig::default();
    config.cors.allowed_origins = vec!["http://localhost:3000".into()];

    let (addr, shutdown) = common::start_server(config, json_echo_router()).await;
    let client = common::client();

    let response = client
        .post(format!("http://{}/api/products", addr))
        .header("origin", "http://localhost:3000")
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "http://localhost:3000"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn malformed_json_gets_400_and_the_server_keeps_serving() {
    let (addr, shutdown) = common::start_server(ServerConfig::default(), json_echo_router()).await;
    let client = common::client();
    let url = format!("http://{}/api/products", addr);

    let response = client
        .post(&url)
        .header("content-type", "application/json")
        .body("{definitely not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // The process is still up and serving.
    let response = client
        .post(&url)
        .json(&json!({ "name": "yerba", "price": 1200 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    shutdown.trigger();
}

#[tokio::test]
async fn parsed_json_reaches_the_collaborator() {
    let (addr, shutdown) = common::start_server(ServerConfig::default(), json_echo_router()).await;
    let client = common::client();

    let sent = json!({ "name": "yerba", "tags": ["organic", "1kg"] });
    let echoed: Value = client
        .post(format!("http://{}/api/products", addr))
        .json(&sent)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(echoed, sent);

    shutdown.trigger();
}

#[tokio::test]
async fn oversized_json_body_is_rejected_with_413() {
    let mut config = ServerConfig::default();
    config.limits.max_body_bytes = 64;

    let (addr, shutdown) = common::start_server(config, json_echo_router()).await;
    let client = common::client();

    let response = client
        .post(format!("http://{}/api/products", addr))
        .header("content-type", "application/json")
        .body(format!("\"{}\"", "x".repeat(256)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 413);

    shutdown.trigger();
}

#[tokio::test]
async fn non_json_bodies_are_left_alone() {
    let (addr, shutdown) = common::start_server(ServerConfig::default(), json_echo_router()).await;
    let client = common::client();

    let echoed: Value = client
        .post(format!("http://{}/api/products", addr))
        .header("content-type", "text/plain")
        .body("{this would not parse}")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(echoed, Value::Null);

    shutdown.trigger();
}
