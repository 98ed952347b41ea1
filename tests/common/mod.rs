// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;
use url::Url;

use book_finder::{
    build_router, catalog::CatalogClient, config::DEFAULT_ALLOWED_ORIGINS, cors_layer,
    state::AppState,
};

pub const TEST_HOSTNAME: &str = "test-host";
pub const VOLUMES_PATH: &str = "/books/v1/volumes";

/// Nothing listens on the discard port, so requests fail to connect.
pub const UNREACHABLE_CATALOG: &str = "http://127.0.0.1:9/books/v1/volumes";

/// The real asset directory shipped with the crate.
pub fn test_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

pub fn test_state(catalog_url: &str, api_key: Option<&str>) -> AppState {
    AppState {
        catalog: CatalogClient::new(
            reqwest::Client::new(),
            Url::parse(catalog_url).expect("valid catalog url"),
            api_key.map(str::to_string),
        ),
        hostname: Some(Arc::from(TEST_HOSTNAME)),
        static_dir: test_static_dir(),
    }
}

pub fn default_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS
        .iter()
        .map(|o| o.to_string())
        .collect()
}

pub fn app_with_state(state: AppState) -> Router {
    build_router(state, cors_layer(&default_origins()))
}

/// Build the full application router pointed at `catalog_url`.
pub fn create_test_app(catalog_url: &str, api_key: Option<&str>) -> Router {
    app_with_state(test_state(catalog_url, api_key))
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

/// GET returning the raw body and headers, for non-JSON responses.
pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send_raw(app, req).await
}

pub async fn get_with_origin(app: Router, uri: &str, origin: &str) -> (StatusCode, HeaderMap) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send_raw(app, req).await;
    (status, headers)
}

pub async fn preflight(app: Router, uri: &str, origin: &str) -> (StatusCode, HeaderMap) {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send_raw(app, req).await;
    (status, headers)
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send_raw(app, req).await;
    let json: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn send_raw(app: Router, req: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8_lossy(&bytes).into_owned())
}

// ── Scenario helpers ─────────────────────────────────────────────────────────

/// A catalog response holding a single "Dune" volume.
pub fn dune_response() -> Value {
    serde_json::json!({
        "kind": "books#volumes",
        "totalItems": 1,
        "items": [{
            "id": "B1hSG45JCX4C",
            "volumeInfo": {
                "title": "Dune",
                "authors": ["Frank Herbert"],
                "imageLinks": { "thumbnail": "http://books.test/dune.jpg" },
                "description": "Set on the desert planet Arrakis.",
                "previewLink": "http://books.test/dune"
            }
        }]
    })
}

pub fn empty_response() -> Value {
    serde_json::json!({ "kind": "books#volumes", "totalItems": 0 })
}
