// handlers/lookups.rs - Read-only lookup lists (items, student titles)

use axum::extract::State;
use serde::Serialize;

use crate::middleware::{ApiResponse, ApiResult};
use crate::server::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemList {
    pub item_list: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleList {
    pub title_list: Vec<String>,
}

/// GET /api/items
pub async fn item_list(State(state): State<AppState>) -> ApiResult<ItemList> {
    let item_list = state.store.list_items().await?;
    Ok(ApiResponse::success(ItemList { item_list }))
}

/// GET /api/studenttitles
pub async fn student_title_list(State(state): State<AppState>) -> ApiResult<TitleList> {
    let title_list = state.store.list_student_titles().await?;
    Ok(ApiResponse::success(TitleList { title_list }))
}
