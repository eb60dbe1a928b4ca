use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{Company, CompanyChanges};
use crate::types::Mutation;

/// Persistence seam for the request handlers.
///
/// Every method is one unit of work: acquire a connection, run exactly one
/// statement, release the connection on every exit path. Implementations
/// return trimmed values from the read methods.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    async fn list_companies(&self) -> Result<Vec<Company>, DatabaseError>;

    /// Duplicate ids surface as a database error, not as a distinct outcome
    async fn insert_company(&self, company: &Company) -> Result<(), DatabaseError>;

    async fn update_company(
        &self,
        id: &str,
        changes: &CompanyChanges,
    ) -> Result<Mutation, DatabaseError>;

    /// Insert, or overwrite name and city when the id already exists. The
    /// affected-row count cannot tell a fresh insert from an unchanged
    /// overwrite under found-rows, so no outcome is reported.
    async fn upsert_company(&self, company: &Company) -> Result<(), DatabaseError>;

    async fn delete_company(&self, id: &str) -> Result<Mutation, DatabaseError>;

    async fn list_items(&self) -> Result<Vec<String>, DatabaseError>;

    async fn list_student_titles(&self) -> Result<Vec<String>, DatabaseError>;

    /// Connectivity probe for the health endpoint
    async fn ping(&self) -> Result<(), DatabaseError>;
}
