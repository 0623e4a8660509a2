//! Record store for inquiries.
//!
//! # Backends
//!
//! - [`PgInquiryStore`] - `PostgreSQL` table `inquiries` (default)
//! - [`HostedInquiryStore`] - hosted table behind a PostgREST-compatible API
//! - [`MemoryInquiryStore`] - in-process table for development and tests
//!
//! All three return rows ordered by `created_at` descending and treat updates
//! or deletes of unknown ids as successful no-ops.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/web/migrations/` and run via:
//! ```bash
//! cargo run -p rocketcall-cli -- migrate
//! ```

mod hosted;
mod memory;
mod postgres;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use rocketcall_core::{Inquiry, InquiryId, InquiryStatus, NewInquiry};

use crate::config::StoreConfig;

pub use hosted::HostedInquiryStore;
pub use memory::MemoryInquiryStore;
pub use postgres::PgInquiryStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Network error talking to the hosted table API.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The hosted table API answered with a non-success status.
    #[error("remote store returned {status}: {message}")]
    Remote { status: u16, message: String },

    /// Stored data could not be interpreted.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// The configured inquiry table.
///
/// Cheap to clone; every variant shares its underlying pool, client, or rows.
#[derive(Debug, Clone)]
pub enum InquiryStore {
    Postgres(PgInquiryStore),
    Hosted(HostedInquiryStore),
    Memory(MemoryInquiryStore),
}

impl InquiryStore {
    /// Connect to the backend selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the pool or HTTP client cannot be created.
    pub async fn connect(config: &StoreConfig) -> Result<Self, RepositoryError> {
        match config {
            StoreConfig::Postgres { database_url } => {
                let pool = create_pool(database_url).await?;
                Ok(Self::Postgres(PgInquiryStore::new(pool)))
            }
            StoreConfig::Hosted(hosted) => Ok(Self::Hosted(HostedInquiryStore::new(hosted)?)),
            StoreConfig::Memory => Ok(Self::Memory(MemoryInquiryStore::new())),
        }
    }

    /// Short backend name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Hosted(_) => "hosted",
            Self::Memory(_) => "memory",
        }
    }

    /// The `PostgreSQL` pool, when this store is backed by one.
    #[must_use]
    pub const fn pg_pool(&self) -> Option<&PgPool> {
        match self {
            Self::Postgres(store) => Some(store.pool()),
            Self::Hosted(_) | Self::Memory(_) => None,
        }
    }

    /// Insert a new inquiry; the store assigns `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the write fails.
    pub async fn insert(&self, new: &NewInquiry) -> Result<Inquiry, RepositoryError> {
        match self {
            Self::Postgres(store) => store.insert(new).await,
            Self::Hosted(store) => store.insert(new).await,
            Self::Memory(store) => Ok(store.insert(new).await),
        }
    }

    /// All inquiries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the read fails.
    pub async fn list(&self) -> Result<Vec<Inquiry>, RepositoryError> {
        match self {
            Self::Postgres(store) => store.list().await,
            Self::Hosted(store) => store.list().await,
            Self::Memory(store) => Ok(store.list().await),
        }
    }

    /// Overwrite the status of `id`. Unknown ids are not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the write fails.
    pub async fn update_status(
        &self,
        id: InquiryId,
        status: InquiryStatus,
    ) -> Result<(), RepositoryError> {
        match self {
            Self::Postgres(store) => store.update_status(id, status).await,
            Self::Hosted(store) => store.update_status(id, status).await,
            Self::Memory(store) => {
                store.update_status(id, status).await;
                Ok(())
            }
        }
    }

    /// Remove `id`. Unknown ids are not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the write fails.
    pub async fn delete(&self, id: InquiryId) -> Result<(), RepositoryError> {
        match self {
            Self::Postgres(store) => store.delete(id).await,
            Self::Hosted(store) => store.delete(id).await,
            Self::Memory(store) => {
                store.delete(id).await;
                Ok(())
            }
        }
    }

    /// Check that the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backend does not answer.
    pub async fn ping(&self) -> Result<(), RepositoryError> {
        match self {
            Self::Postgres(store) => store.ping().await,
            Self::Hosted(store) => store.ping().await,
            Self::Memory(_) => Ok(()),
        }
    }
}

impl From<MemoryInquiryStore> for InquiryStore {
    fn from(store: MemoryInquiryStore) -> Self {
        Self::Memory(store)
    }
}
