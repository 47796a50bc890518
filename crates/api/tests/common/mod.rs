#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pagekit_core::PaginationConfig;
use tower::ServiceExt;

use pagekit_api::config::ServerConfig;
use pagekit_api::router::build_app_router;

/// Build a test `ServerConfig` with the given pagination settings.
pub fn test_config(pagination: PaginationConfig) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        pagination,
    }
}

/// Build the full application router exactly as the binary does.
pub fn build_test_app(pagination: PaginationConfig) -> Router {
    build_app_router(&test_config(pagination))
}

/// Send a GET request for `uri` through `app`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Header value as a string, if present.
pub fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
}
