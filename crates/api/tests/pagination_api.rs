//! Integration tests for the pagination layer.

mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use common::{body_json, build_test_app, header};
use pagekit_api::middleware::{PageValues, Paginated, PaginationLayer};
use pagekit_core::PaginationConfig;
use serde_json::{json, Value};

/// Router whose only handler echoes the published values by name.
fn echo_app(config: PaginationConfig) -> Router {
    let page_param = config.page_param.clone();
    let size_param = config.size_param.clone();

    Router::new()
        .route(
            "/echo",
            get(move |values: PageValues| async move {
                Json(json!({
                    "page": values.get(&page_param),
                    "size": values.get(&size_param),
                    "page_literal": values.get("page"),
                }))
            }),
        )
        .layer(PaginationLayer::new(config))
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_integer_page_returns_400() {
    let app = build_test_app(PaginationConfig::default());
    let response = common::get(app, "/api/v1/items?page=notanumber").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(header(&response, "x-page").is_none());
    let json = body_json(response).await;
    assert_eq!(json, json!({ "error": "page parameter must be an integer" }));
}

#[tokio::test]
async fn non_integer_size_returns_400() {
    let app = build_test_app(PaginationConfig::default());
    let response = common::get(app, "/api/v1/items?page=1&size=notanumber").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "size parameter must be an integer");
}

#[tokio::test]
async fn negative_page_returns_400() {
    let app = build_test_app(PaginationConfig::default());
    let response = common::get(app, "/api/v1/items?page=-1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "page number must be positive");
}

#[tokio::test]
async fn size_below_min_returns_400() {
    let app = build_test_app(PaginationConfig::default());
    let response = common::get(app, "/api/v1/items?page=1&size=0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "size must be between 10 and 100");
}

#[tokio::test]
async fn size_above_max_returns_400() {
    let app = build_test_app(PaginationConfig::default());
    let response = common::get(app, "/api/v1/items?size=101").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(header(&response, "x-size").is_none());
    let json = body_json(response).await;
    assert_eq!(json["error"], "size must be between 10 and 100");
}

#[tokio::test]
async fn rejected_request_never_reaches_handler() {
    let app = Router::new()
        .route(
            "/echo",
            get(|| async { StatusCode::IM_A_TEAPOT }),
        )
        .layer(PaginationLayer::default());

    let response = common::get(app.clone(), "/echo?page=x").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = common::get(app, "/echo").await;
    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
}

// ---------------------------------------------------------------------------
// Acceptance
// ---------------------------------------------------------------------------

#[tokio::test]
async fn defaults_apply_without_query() {
    let app = build_test_app(PaginationConfig::default());
    let response = common::get(app, "/api/v1/items").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "x-page"), Some("1"));
    assert_eq!(header(&response, "x-size"), Some("10"));

    let json = body_json(response).await;
    assert_eq!(json["data"]["page"], 1);
    assert_eq!(json["data"]["size"], 10);
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 10);
    assert_eq!(json["data"]["items"][0]["id"], 1);
}

#[tokio::test]
async fn second_page_of_twenty() {
    let app = build_test_app(PaginationConfig::default());
    let response = common::get(app, "/api/v1/items?page=2&size=20").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "x-page"), Some("2"));
    assert_eq!(header(&response, "x-size"), Some("20"));

    let json = body_json(response).await;
    assert_eq!(json["data"]["page"], 2);
    assert_eq!(json["data"]["size"], 20);
    assert_eq!(json["data"]["items"][0]["id"], 21);
}

#[tokio::test]
async fn size_bounds_are_inclusive() {
    let app = build_test_app(PaginationConfig::default());
    for uri in ["/api/v1/items?size=10", "/api/v1/items?page=1&size=100"] {
        let response = common::get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn custom_config_publishes_under_custom_names() {
    let config = PaginationConfig::new("pages", "items", 0, 5, 1, 25);
    let response = common::get(echo_app(config), "/echo").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "x-pages"), Some("0"));
    assert_eq!(header(&response, "x-items"), Some("5"));

    let json = body_json(response).await;
    assert_eq!(json["page"], 0);
    assert_eq!(json["size"], 5);
    assert_eq!(json["page_literal"], Value::Null);
}

#[tokio::test]
async fn headers_can_be_disabled() {
    let config = PaginationConfig::default().without_headers();
    let response = common::get(echo_app(config), "/echo?page=3").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(header(&response, "x-page").is_none());
    assert!(header(&response, "x-size").is_none());

    let json = body_json(response).await;
    assert_eq!(json["page"], 3);
}

#[tokio::test]
async fn custom_header_prefix() {
    let config = PaginationConfig::default().header_prefix("Pagination-");
    let response = common::get(echo_app(config), "/echo?page=4&size=40").await;

    assert_eq!(header(&response, "pagination-page"), Some("4"));
    assert_eq!(header(&response, "pagination-size"), Some("40"));
}

#[tokio::test]
async fn empty_header_prefix_sends_bare_names() {
    let app = build_test_app(PaginationConfig::default().header_prefix(""));
    let response = common::get(app, "/api/v1/items?page=2&size=20").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "page"), Some("2"));
    assert_eq!(header(&response, "size"), Some("20"));
    assert!(header(&response, "x-page").is_none());
}

#[tokio::test]
async fn handler_set_header_is_kept() {
    let app = Router::new()
        .route(
            "/custom",
            get(|| async { ([("x-page", "handler")], StatusCode::OK) }),
        )
        .layer(PaginationLayer::default());

    let response = common::get(app, "/custom?page=5").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "x-page"), Some("handler"));
    assert_eq!(header(&response, "x-size"), Some("10"));
}

#[tokio::test]
async fn repeated_requests_yield_identical_outcomes() {
    let app = echo_app(PaginationConfig::default());

    let first = common::get(app.clone(), "/echo?page=7&size=30").await;
    let second = common::get(app, "/echo?page=7&size=30").await;

    assert_eq!(first.status(), second.status());
    assert_eq!(header(&first, "x-page"), header(&second, "x-page"));
    assert_eq!(body_json(first).await, body_json(second).await);
}

// ---------------------------------------------------------------------------
// Extractors without the layer
// ---------------------------------------------------------------------------

#[tokio::test]
async fn extractor_without_layer_returns_500() {
    let app = Router::new().route(
        "/bare",
        get(|Paginated(p): Paginated| async move { Json(json!({ "page": p.page })) }),
    );

    let response = common::get(app, "/bare").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn page_values_extractor_sees_both_entries() {
    let app = Router::new()
        .route(
            "/count",
            get(|values: PageValues| async move {
                Json(json!({ "empty": values.is_empty(), "size": values.get("size") }))
            }),
        )
        .layer(PaginationLayer::default());

    let json = body_json(common::get(app, "/count?size=15").await).await;
    assert_eq!(json["empty"], false);
    assert_eq!(json["size"], 15);
}
