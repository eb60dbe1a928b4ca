// handlers/companies/upsert.rs - PUT /api/companies/:company_id handler

use axum::extract::{rejection::JsonRejection, Json, Path, State};
use serde::Deserialize;

use crate::database::Company;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Message};
use crate::server::AppState;
use crate::validation::{Validator, COMPANY_CITY, COMPANY_ID, COMPANY_NAME};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCompanyRequest {
    pub company_name: Option<String>,
    pub company_city: Option<String>,
}

impl UpsertCompanyRequest {
    pub fn validate(self, company_id: &str) -> Result<Company, ApiError> {
        let mut v = Validator::new();
        let id = v.required(&COMPANY_ID, Some(company_id));
        let name = v.required(&COMPANY_NAME, self.company_name.as_deref());
        let city = v.required(&COMPANY_CITY, self.company_city.as_deref());

        match (id, name, city) {
            (Some(id), Some(name), Some(city)) if v.is_valid() => Ok(Company { id, name, city }),
            _ => Err(v.into_error()),
        }
    }
}

/**
 * PUT /api/companies/:company_id - Create or fully replace a company
 *
 * Runs as a single insert-or-update statement keyed by the id and always
 * answers 200. MySQL reports one affected row both for a fresh insert and for
 * an overwrite with identical values, so the two cannot be told apart.
 */
pub async fn company_upsert(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
    payload: Result<Json<UpsertCompanyRequest>, JsonRejection>,
) -> ApiResult<Message> {
    let Json(request) = payload?;
    let company = request.validate(&company_id)?;

    state.store.upsert_company(&company).await?;
    tracing::info!("Upserted company {}", company.id);
    Ok(ApiResponse::success(Message::new("Company saved successfully")))
}
