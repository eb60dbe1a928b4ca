// handlers/companies/update.rs - PATCH /api/companies/:company_id handler

use axum::extract::{rejection::JsonRejection, Json, Path, State};
use serde::Deserialize;

use crate::database::CompanyChanges;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Message};
use crate::server::AppState;
use crate::types::Mutation;
use crate::validation::{Validator, COMPANY_CITY, COMPANY_ID, COMPANY_NAME};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    pub company_name: Option<String>,
    pub company_city: Option<String>,
}

impl UpdateCompanyRequest {
    /// Fields are individually optional, but at least one has to be present
    pub fn validate(self, company_id: &str) -> Result<(String, CompanyChanges), ApiError> {
        let mut v = Validator::new();
        let id = v.required(&COMPANY_ID, Some(company_id));
        let changes = CompanyChanges {
            name: v.optional(&COMPANY_NAME, self.company_name.as_deref()),
            city: v.optional(&COMPANY_CITY, self.company_city.as_deref()),
        };

        let id = match id {
            Some(id) if v.is_valid() => id,
            _ => return Err(v.into_error()),
        };
        if changes.is_empty() {
            return Err(ApiError::bad_request(
                "At least one of companyName or companyCity must be provided",
            ));
        }
        Ok((id, changes))
    }
}

/// PATCH /api/companies/:company_id - Update only the supplied columns
pub async fn company_update(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
    payload: Result<Json<UpdateCompanyRequest>, JsonRejection>,
) -> ApiResult<Message> {
    let Json(request) = payload?;
    let (id, changes) = request.validate(&company_id)?;

    match state.store.update_company(&id, &changes).await? {
        Mutation::Applied => {
            tracing::info!("Updated company {}", id);
            Ok(ApiResponse::success(Message::new("Company updated successfully")))
        }
        Mutation::NotFound => {
            tracing::debug!("Update skipped, company {} not found", id);
            Err(ApiError::not_found("Company not found"))
        }
    }
}
