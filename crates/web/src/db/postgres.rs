//! `PostgreSQL` inquiry table.

use sqlx::PgPool;

use rocketcall_core::{Inquiry, InquiryId, InquiryStatus, NewInquiry};

use super::RepositoryError;

/// Inquiry table in `PostgreSQL`.
#[derive(Debug, Clone)]
pub struct PgInquiryStore {
    pool: PgPool,
}

impl PgInquiryStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert a row and return it with the generated `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn insert(&self, new: &NewInquiry) -> Result<Inquiry, RepositoryError> {
        let inquiry = sqlx::query_as::<_, Inquiry>(
            r"
            INSERT INTO inquiries (name, phone, message, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, phone, message, status, created_at
            ",
        )
        .bind(new.name())
        .bind(new.phone())
        .bind(new.message())
        .bind(new.status())
        .fetch_one(&self.pool)
        .await?;

        Ok(inquiry)
    }

    /// All rows, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Inquiry>, RepositoryError> {
        let rows = sqlx::query_as::<_, Inquiry>(
            r"
            SELECT id, name, phone, message, status, created_at
            FROM inquiries
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update_status(
        &self,
        id: InquiryId,
        status: InquiryStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE inquiries SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(inquiry_id = %id, "Status update matched no rows");
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: InquiryId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(inquiry_id = %id, "Delete matched no rows");
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the database is unreachable.
    pub async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
