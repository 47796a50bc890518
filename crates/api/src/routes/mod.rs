pub mod health;
pub mod items;

use axum::routing::get;
use axum::Router;
use pagekit_core::PaginationConfig;

use crate::middleware::PaginationLayer;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /items          list (paginated)
/// ```
///
/// Every route in the tree sits behind [`PaginationLayer`].
pub fn api_routes(pagination: PaginationConfig) -> Router {
    Router::new()
        .route("/items", get(items::list_items))
        .layer(PaginationLayer::new(pagination))
}
