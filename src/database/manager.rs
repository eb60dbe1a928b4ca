use std::str::FromStr;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::ConnectOptions;
use thiserror::Error;
use tracing::info;

use crate::config::{redact_database_url, AppConfig, ConfigError};
use crate::validation::{COMPANY_CITY, COMPANY_ID, COMPANY_NAME};

/// Errors from the database layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Tables the API reads and writes. Columns are CHAR, which is why reads trim.
/// Company columns are sized to hold a field after HTML escaping.
fn schema() -> [String; 3] {
    [
        format!(
            r#"CREATE TABLE IF NOT EXISTS company (
        COMPANY_ID CHAR({}) NOT NULL PRIMARY KEY,
        COMPANY_NAME CHAR({}) NOT NULL,
        COMPANY_CITY CHAR({}) NOT NULL
    )"#,
            COMPANY_ID.stored_width(),
            COMPANY_NAME.stored_width(),
            COMPANY_CITY.stored_width()
        ),
        r#"CREATE TABLE IF NOT EXISTS listofitem (
        ITEMNAME CHAR(50)
    )"#
        .to_string(),
        r#"CREATE TABLE IF NOT EXISTS student (
        TITLE CHAR(50)
    )"#
        .to_string(),
    ]
}

/// Builds the process-wide connection pool. The pool is created once at startup
/// and handed to the router state; nothing reaches for it globally.
pub struct DatabaseManager;

impl DatabaseManager {
    /// Connections are opened on first use, so the server comes up (and reports
    /// a degraded /health) even while the database is unreachable.
    pub fn connect(config: &AppConfig) -> Result<MySqlPool, DatabaseError> {
        let url = config.database_url()?;

        let mut options = MySqlConnectOptions::from_str(url)?;
        if !config.database.enable_query_logging {
            options = options.disable_statement_logging();
        }

        let pool = MySqlPoolOptions::new()
            .max_connections(config.database.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy_with(options);

        info!(
            "Created database pool for {} (max {} connections)",
            redact_database_url(url)?,
            config.database.max_connections
        );
        Ok(pool)
    }

    /// Create the company and lookup tables when they do not exist yet
    pub async fn init_schema(pool: &MySqlPool) -> Result<(), DatabaseError> {
        for statement in schema() {
            sqlx::query(&statement).execute(pool).await?;
        }
        info!("Schema ready: company, listofitem, student");
        Ok(())
    }

    /// Close the pool on shutdown, waiting for checked-out connections to return
    pub async fn close(pool: MySqlPool) {
        pool.close().await;
        info!("Closed database pool");
    }
}
