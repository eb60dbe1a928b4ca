// handlers/companies/list.rs - GET /api/companies handler

use axum::extract::State;
use serde::Serialize;

use crate::database::Company;
use crate::middleware::{ApiResponse, ApiResult};
use crate::server::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyList {
    pub company_list: Vec<Company>,
}

/// GET /api/companies - Every company, unpaginated
pub async fn company_list(State(state): State<AppState>) -> ApiResult<CompanyList> {
    let company_list = state.store.list_companies().await?;
    Ok(ApiResponse::success(CompanyList { company_list }))
}
