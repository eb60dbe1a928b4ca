use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tokio::sync::RwLock;
use tower::ServiceExt;

use crate::config::AppConfig;
use crate::database::models::{trim_values, CompanyRow};
use crate::database::{Company, CompanyChanges, CompanyStore, DatabaseError};
use crate::server::{app, AppState};
use crate::types::Mutation;
use crate::validation::{FieldRule, COMPANY_CITY, COMPANY_ID, COMPANY_NAME};

fn pad(value: &str, width: usize) -> String {
    format!("{:<width$}", value, width = width)
}

/// Strict-mode MySQL refuses values wider than a CHAR column instead of truncating
fn fit(column: &str, value: &str, rule: &FieldRule) -> Result<String, DatabaseError> {
    let width = rule.stored_width();
    if value.chars().count() > width {
        return Err(DatabaseError::QueryError(format!(
            "Data too long for column '{}'",
            column
        )));
    }
    Ok(pad(value, width))
}

/// In-memory stand-in for the MySQL tables. Values are stored space padded to
/// the width `init-schema` declares, and over-wide values are refused.
pub struct MemoryStore {
    companies: RwLock<BTreeMap<String, CompanyRow>>,
    items: Vec<Option<String>>,
    titles: Vec<Option<String>>,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            companies: RwLock::new(BTreeMap::new()),
            items: Vec::new(),
            titles: Vec::new(),
            offline: false,
        }
    }

    /// Every call fails the way an exhausted pool does
    pub fn offline() -> Self {
        Self { offline: true, ..Self::new() }
    }

    pub fn with_items(mut self, items: &[&str]) -> Self {
        self.items = items.iter().map(|s| Some(pad(s, 50))).collect();
        self
    }

    pub fn with_titles(mut self, titles: &[Option<&str>]) -> Self {
        self.titles = titles.iter().map(|s| s.map(|t| pad(t, 50))).collect();
        self
    }

    fn check_online(&self) -> Result<(), DatabaseError> {
        if self.offline {
            Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }

    fn row(company: &Company) -> Result<CompanyRow, DatabaseError> {
        Ok(CompanyRow {
            company_id: fit("COMPANY_ID", &company.id, &COMPANY_ID)?,
            company_name: fit("COMPANY_NAME", &company.name, &COMPANY_NAME)?,
            company_city: fit("COMPANY_CITY", &company.city, &COMPANY_CITY)?,
        })
    }
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn list_companies(&self) -> Result<Vec<Company>, DatabaseError> {
        self.check_online()?;
        let companies = self.companies.read().await;
        Ok(companies.values().cloned().map(Company::from).collect())
    }

    async fn insert_company(&self, company: &Company) -> Result<(), DatabaseError> {
        self.check_online()?;
        let mut companies = self.companies.write().await;
        if companies.contains_key(&company.id) {
            return Err(DatabaseError::QueryError(format!(
                "Duplicate entry '{}' for key 'PRIMARY'",
                company.id
            )));
        }
        let row = Self::row(company)?;
        companies.insert(company.id.clone(), row);
        Ok(())
    }

    async fn update_company(
        &self,
        id: &str,
        changes: &CompanyChanges,
    ) -> Result<Mutation, DatabaseError> {
        self.check_online()?;
        let mut companies = self.companies.write().await;
        match companies.get_mut(id) {
            Some(row) => {
                let mut company = Company::from(row.clone());
                if let Some(name) = &changes.name {
                    company.name = name.clone();
                }
                if let Some(city) = &changes.city {
                    company.city = city.clone();
                }
                *row = Self::row(&company)?;
                Ok(Mutation::Applied)
            }
            None => Ok(Mutation::NotFound),
        }
    }

    async fn upsert_company(&self, company: &Company) -> Result<(), DatabaseError> {
        self.check_online()?;
        let row = Self::row(company)?;
        self.companies.write().await.insert(company.id.clone(), row);
        Ok(())
    }

    async fn delete_company(&self, id: &str) -> Result<Mutation, DatabaseError> {
        self.check_online()?;
        let mut companies = self.companies.write().await;
        Ok(match companies.remove(id) {
            Some(_) => Mutation::Applied,
            None => Mutation::NotFound,
        })
    }

    async fn list_items(&self) -> Result<Vec<String>, DatabaseError> {
        self.check_online()?;
        Ok(trim_values(self.items.clone()))
    }

    async fn list_student_titles(&self) -> Result<Vec<String>, DatabaseError> {
        self.check_online()?;
        Ok(trim_values(self.titles.clone()))
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        self.check_online()
    }
}

/// Full router over the given store, with development defaults
pub fn test_app(store: Arc<MemoryStore>) -> Router {
    app(AppState::new(store), &AppConfig::development())
}

/// Send one request through the router; returns the status and the JSON body
/// (Null for an empty body).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refuses_values_wider_than_the_column() {
        let store = MemoryStore::new();
        let company = Company {
            id: "C001".to_string(),
            name: "N".repeat(COMPANY_NAME.stored_width() + 1),
            city: "Oslo".to_string(),
        };
        assert!(store.insert_company(&company).await.is_err());
        assert!(store.upsert_company(&company).await.is_err());
        assert!(store.list_companies().await.unwrap().is_empty());
    }
}
