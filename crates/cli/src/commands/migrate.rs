//! Database migration command.
//!
//! # Environment Variables
//!
//! - `ROCKETCALL_STORE` - must be `postgres` (the default)
//! - `ROCKETCALL_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string
//!
//! Migrations live in `crates/web/migrations/`. The admin session table is
//! created by `tower-sessions-sqlx-store`.

use rocketcall_web::config::{ConfigError, StoreConfig};
use rocketcall_web::db::create_pool;
use secrecy::SecretString;
use thiserror::Error;
use tower_sessions_sqlx_store::PostgresStore;

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Store settings are missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The configured store has no schema to migrate.
    #[error("ROCKETCALL_STORE={0} has no migrations; only the postgres store is migrated")]
    NotPostgres(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A migration script failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Apply pending inquiry migrations and create the session table.
pub async fn run() -> Result<(), MigrationError> {
    let database_url = database_url(StoreConfig::from_env()?)?;

    tracing::info!("Connecting to database...");
    let pool = create_pool(&database_url).await?;

    tracing::info!("Running inquiry migrations...");
    sqlx::migrate!("../web/migrations").run(&pool).await?;

    tracing::info!("Creating admin session table...");
    PostgresStore::new(pool).migrate().await?;

    tracing::info!("Migrations complete!");
    Ok(())
}

fn database_url(config: StoreConfig) -> Result<SecretString, MigrationError> {
    match config {
        StoreConfig::Postgres { database_url } => Ok(database_url),
        other => Err(MigrationError::NotPostgres(other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_postgres_store_yields_url() {
        let config = StoreConfig::Postgres {
            database_url: SecretString::from("postgres://localhost/rocketcall"),
        };

        let url = database_url(config).ok();
        assert_eq!(
            url.as_ref().map(|u| u.expose_secret()),
            Some("postgres://localhost/rocketcall")
        );
    }

    #[test]
    fn test_other_stores_are_refused() {
        let err = database_url(StoreConfig::Memory).err();
        assert!(matches!(err, Some(MigrationError::NotPostgres("memory"))));
    }
}
