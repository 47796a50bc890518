//! Synthetic item listing used to exercise the pagination layer end to end.

use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::Paginated;

/// `{ "data": ... }` envelope returned by the listing.
#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub data: ItemsPage,
}

#[derive(Debug, Serialize)]
pub struct ItemsPage {
    pub page: i64,
    pub size: i64,
    pub items: Vec<Item>,
}

#[derive(Debug, Serialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// GET /api/v1/items -- one window of generated items.
///
/// Pages are treated as one-based here; page `0` yields the first window.
pub async fn list_items(Paginated(p): Paginated) -> AppResult<Json<ItemsResponse>> {
    let offset = p.page.saturating_sub(1).max(0).saturating_mul(p.size);
    let items = (0..p.size.max(0))
        .map(|i| offset.saturating_add(i).saturating_add(1))
        .map(|id| Item {
            id,
            name: format!("item-{id}"),
        })
        .collect();

    Ok(Json(ItemsResponse {
        data: ItemsPage {
            page: p.page,
            size: p.size,
            items,
        },
    }))
}
