use serde::Serialize;
use sqlx::FromRow;

/// A company as exposed over the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub city: String,
}

/// Raw `company` row. Columns are fixed width, so values arrive space padded.
#[derive(Debug, Clone, FromRow)]
pub struct CompanyRow {
    #[sqlx(rename = "COMPANY_ID")]
    pub company_id: String,
    #[sqlx(rename = "COMPANY_NAME")]
    pub company_name: String,
    #[sqlx(rename = "COMPANY_CITY")]
    pub company_city: String,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self {
            id: row.company_id.trim().to_string(),
            name: row.company_name.trim().to_string(),
            city: row.company_city.trim().to_string(),
        }
    }
}

/// Columns supplied to a partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyChanges {
    pub name: Option<String>,
    pub city: Option<String>,
}

impl CompanyChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.city.is_none()
    }
}

/// Trim every value of a single-column lookup; NULL cells become empty strings
pub fn trim_values(values: Vec<Option<String>>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.map(|s| s.trim().to_string()).unwrap_or_default())
        .collect()
}
