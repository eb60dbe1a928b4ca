// handlers/companies/create.rs - POST /api/companies handler

use axum::extract::{rejection::JsonRejection, Json, State};
use serde::Deserialize;

use crate::database::Company;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Message};
use crate::server::AppState;
use crate::validation::{Validator, COMPANY_CITY, COMPANY_ID, COMPANY_NAME};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub company_city: Option<String>,
}

impl CreateCompanyRequest {
    /// All three fields are required
    pub fn validate(self) -> Result<Company, ApiError> {
        let mut v = Validator::new();
        let id = v.required(&COMPANY_ID, self.company_id.as_deref());
        let name = v.required(&COMPANY_NAME, self.company_name.as_deref());
        let city = v.required(&COMPANY_CITY, self.company_city.as_deref());

        match (id, name, city) {
            (Some(id), Some(name), Some(city)) if v.is_valid() => Ok(Company { id, name, city }),
            _ => Err(v.into_error()),
        }
    }
}

/// POST /api/companies - Insert a new company.
///
/// A duplicate id is a constraint violation and comes back as a generic 500.
pub async fn company_create(
    State(state): State<AppState>,
    payload: Result<Json<CreateCompanyRequest>, JsonRejection>,
) -> ApiResult<Message> {
    let Json(request) = payload?;
    let company = request.validate()?;

    state.store.insert_company(&company).await?;

    tracing::info!("Created company {}", company.id);
    Ok(ApiResponse::created(Message::new("Company created successfully")))
}
