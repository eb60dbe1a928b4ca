use async_trait::async_trait;
use sqlx::mysql::MySqlPool;
use sqlx::pool::PoolConnection;
use sqlx::MySql;
use tracing::debug;

use crate::database::manager::DatabaseError;
use crate::database::models::{trim_values, Company, CompanyChanges, CompanyRow};
use crate::database::query_builder::{self, SELECT_COMPANIES, SELECT_ITEMS, SELECT_STUDENT_TITLES};
use crate::database::store::CompanyStore;
use crate::types::Mutation;

/// MySQL-backed store. Each call checks one connection out of the pool; the
/// guard returns it to the pool when it drops, whether the statement succeeded
/// or not.
#[derive(Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn acquire(&self) -> Result<PoolConnection<MySql>, DatabaseError> {
        let conn = self.pool.acquire().await?;
        debug!(
            "Acquired connection ({} open, {} idle)",
            self.pool.size(),
            self.pool.num_idle()
        );
        Ok(conn)
    }

    async fn select_column(&self, sql: &str) -> Result<Vec<String>, DatabaseError> {
        let mut conn = self.acquire().await?;
        let values = sqlx::query_scalar::<_, Option<String>>(sql)
            .fetch_all(&mut *conn)
            .await?;
        Ok(trim_values(values))
    }
}

#[async_trait]
impl CompanyStore for MySqlRepository {
    async fn list_companies(&self) -> Result<Vec<Company>, DatabaseError> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, CompanyRow>(SELECT_COMPANIES)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn insert_company(&self, company: &Company) -> Result<(), DatabaseError> {
        let stmt = query_builder::insert_company(company);
        let mut conn = self.acquire().await?;
        stmt.bind().execute(&mut *conn).await?;
        Ok(())
    }

    async fn update_company(
        &self,
        id: &str,
        changes: &CompanyChanges,
    ) -> Result<Mutation, DatabaseError> {
        let stmt = query_builder::update_company(id, changes)
            .ok_or_else(|| DatabaseError::QueryError("update with no columns".to_string()))?;
        let mut conn = self.acquire().await?;
        let result = stmt.bind().execute(&mut *conn).await?;
        Ok(Mutation::from_rows_affected(result.rows_affected()))
    }

    async fn upsert_company(&self, company: &Company) -> Result<(), DatabaseError> {
        let stmt = query_builder::upsert_company(company);
        let mut conn = self.acquire().await?;
        let result = stmt.bind().execute(&mut *conn).await?;
        debug!("Upsert of {} affected {} row(s)", company.id, result.rows_affected());
        Ok(())
    }

    async fn delete_company(&self, id: &str) -> Result<Mutation, DatabaseError> {
        let stmt = query_builder::delete_company(id);
        let mut conn = self.acquire().await?;
        let result = stmt.bind().execute(&mut *conn).await?;
        Ok(Mutation::from_rows_affected(result.rows_affected()))
    }

    async fn list_items(&self) -> Result<Vec<String>, DatabaseError> {
        self.select_column(SELECT_ITEMS).await
    }

    async fn list_student_titles(&self) -> Result<Vec<String>, DatabaseError> {
        self.select_column(SELECT_STUDENT_TITLES).await
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        let mut conn = self.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}
