// handlers/companies/delete.rs - DELETE /api/companies/:company_id handler

use axum::extract::{Path, State};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Message};
use crate::server::AppState;
use crate::types::Mutation;
use crate::validation::{Validator, COMPANY_ID};

/// DELETE /api/companies/:company_id - Hard delete; there is no trash
pub async fn company_delete(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> ApiResult<Message> {
    let mut v = Validator::new();
    let id = match v.required(&COMPANY_ID, Some(company_id.as_str())) {
        Some(id) => id,
        None => return Err(v.into_error()),
    };

    match state.store.delete_company(&id).await? {
        Mutation::Applied => {
            tracing::info!("Deleted company {}", id);
            Ok(ApiResponse::success(Message::new("Company deleted successfully")))
        }
        Mutation::NotFound => {
            tracing::debug!("Delete skipped, company {} not found", id);
            Err(ApiError::not_found("Company not found"))
        }
    }
}
