use sqlx::mysql::MySqlArguments;
use sqlx::MySql;

use crate::database::models::{Company, CompanyChanges};

/// A parameterized statement: `?` placeholders plus their values in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    pub query: String,
    pub params: Vec<String>,
}

impl SqlStatement {
    fn new(query: impl Into<String>, params: Vec<String>) -> Self {
        Self { query: query.into(), params }
    }

    /// Prepare the statement with every parameter bound
    pub fn bind(&self) -> sqlx::query::Query<'_, MySql, MySqlArguments> {
        self.params
            .iter()
            .fold(sqlx::query(&self.query), |q, p| q.bind(p))
    }
}

pub const SELECT_COMPANIES: &str = "SELECT COMPANY_ID, COMPANY_NAME, COMPANY_CITY FROM company";
pub const SELECT_ITEMS: &str = "SELECT ITEMNAME FROM listofitem";
pub const SELECT_STUDENT_TITLES: &str = "SELECT TITLE FROM student";

pub fn insert_company(company: &Company) -> SqlStatement {
    SqlStatement::new(
        "INSERT INTO company (COMPANY_ID, COMPANY_NAME, COMPANY_CITY) VALUES (?, ?, ?)",
        vec![company.id.clone(), company.name.clone(), company.city.clone()],
    )
}

/// UPDATE naming only the supplied columns. Returns None when there is nothing to set.
pub fn update_company(id: &str, changes: &CompanyChanges) -> Option<SqlStatement> {
    let mut assignments = Vec::with_capacity(2);
    let mut params = Vec::with_capacity(3);

    if let Some(name) = &changes.name {
        assignments.push("COMPANY_NAME = ?");
        params.push(name.clone());
    }
    if let Some(city) = &changes.city {
        assignments.push("COMPANY_CITY = ?");
        params.push(city.clone());
    }
    if assignments.is_empty() {
        return None;
    }

    params.push(id.to_string());
    Some(SqlStatement::new(
        format!("UPDATE company SET {} WHERE COMPANY_ID = ?", assignments.join(", ")),
        params,
    ))
}

/// Insert, or overwrite name and city when the id already exists
pub fn upsert_company(company: &Company) -> SqlStatement {
    SqlStatement::new(
        "INSERT INTO company (COMPANY_ID, COMPANY_NAME, COMPANY_CITY) VALUES (?, ?, ?) \
         ON DUPLICATE KEY UPDATE COMPANY_NAME = ?, COMPANY_CITY = ?",
        vec![
            company.id.clone(),
            company.name.clone(),
            company.city.clone(),
            company.name.clone(),
            company.city.clone(),
        ],
    )
}

pub fn delete_company(id: &str) -> SqlStatement {
    SqlStatement::new("DELETE FROM company WHERE COMPANY_ID = ?", vec![id.to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> Company {
        Company {
            id: "C001".to_string(),
            name: "TechCorp".to_string(),
            city: "San Francisco".to_string(),
        }
    }

    fn placeholders(sql: &str) -> usize {
        sql.matches('?').count()
    }

    #[test]
    fn insert_binds_all_three_columns() {
        let stmt = insert_company(&company());
        assert_eq!(placeholders(&stmt.query), 3);
        assert_eq!(stmt.params, vec!["C001", "TechCorp", "San Francisco"]);
    }

    #[test]
    fn update_names_only_supplied_columns() {
        let changes = CompanyChanges { name: None, city: Some("Denver".to_string()) };
        let stmt = update_company("C001", &changes).unwrap();
        assert_eq!(stmt.query, "UPDATE company SET COMPANY_CITY = ? WHERE COMPANY_ID = ?");
        assert_eq!(stmt.params, vec!["Denver", "C001"]);

        let changes = CompanyChanges {
            name: Some("Acme".to_string()),
            city: Some("Denver".to_string()),
        };
        let stmt = update_company("C001", &changes).unwrap();
        assert_eq!(
            stmt.query,
            "UPDATE company SET COMPANY_NAME = ?, COMPANY_CITY = ? WHERE COMPANY_ID = ?"
        );
        assert_eq!(stmt.params, vec!["Acme", "Denver", "C001"]);
    }

    #[test]
    fn update_without_changes_builds_nothing() {
        assert!(update_company("C001", &CompanyChanges::default()).is_none());
    }

    #[test]
    fn upsert_never_assigns_the_id() {
        let stmt = upsert_company(&company());
        let update_clause = stmt.query.split("ON DUPLICATE KEY UPDATE").nth(1).unwrap();
        assert!(!update_clause.contains("COMPANY_ID"));
        assert_eq!(placeholders(&stmt.query), stmt.params.len());
    }

    #[test]
    fn delete_is_keyed_by_id() {
        let stmt = delete_company("C001");
        assert_eq!(stmt.query, "DELETE FROM company WHERE COMPANY_ID = ?");
        assert_eq!(stmt.params, vec!["C001"]);
    }
}
