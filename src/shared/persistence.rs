use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, RuntimeErr};
use sqlx::error::DatabaseError;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::DatabaseConfig;
use crate::shared::error::StoreError;

/// Opens the pool, retrying a bounded number of times while the database
/// comes up. This is the only retry loop in the process.
pub async fn connect_with_retry(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let mut attempt = 0;
    loop {
        attempt += 1;
        match Database::connect(opt.clone()).await {
            Ok(conn) => {
                info!(attempt, "Connected to database");
                return Ok(conn);
            }
            Err(e) if attempt <= config.connect_retries => {
                warn!(
                    attempt,
                    retries = config.connect_retries,
                    error = %e,
                    "Database connection failed, retrying"
                );
                tokio::time::sleep(config.connect_retry_delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Classifies a sea-orm error into a [`StoreError`].
///
/// Uniqueness and foreign-key violations are recognised from the driver's
/// SQLSTATE class and carry the constraint name Postgres reported.
pub fn classify_db_error(err: DbErr) -> StoreError {
    if let Some(db_err) = database_error(&err) {
        let constraint = db_err.constraint().unwrap_or_default().to_string();

        if db_err.is_unique_violation() {
            return StoreError::UniqueViolation { constraint };
        }
        if db_err.is_foreign_key_violation() {
            return StoreError::ForeignKeyViolation { constraint };
        }
    }

    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => StoreError::NoRows,
        other => StoreError::Other(other.to_string()),
    }
}

fn database_error(err: &DbErr) -> Option<&dyn DatabaseError> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(e))
        | DbErr::Query(RuntimeErr::SqlxError(e))
        | DbErr::Conn(RuntimeErr::SqlxError(e)) => e.as_database_error(),
        _ => None,
    }
}
