//! Access log repository.
//!
//! Queries are plain `sqlx::query` calls; the table is owned outside this
//! service, so there is no offline query metadata to check them against.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use postal_lookup_core::{AccessLogSummary, PostalCode};

use super::{AccessLogStore, RepositoryError};

/// `PostgreSQL`-backed [`AccessLogStore`].
#[derive(Clone)]
pub struct AccessLogRepository {
    pool: PgPool,
}

impl AccessLogRepository {
    /// Create a new access log repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AccessLogStore for AccessLogRepository {
    #[instrument(skip(self), fields(postal_code = %postal_code))]
    async fn record_access(
        &self,
        postal_code: &PostalCode,
        created_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO access_logs (postal_code, created_at) VALUES ($1, $2)")
            .bind(postal_code)
            .bind(created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn summarize_access(&self) -> Result<Vec<AccessLogSummary>, RepositoryError> {
        let rows: Vec<(PostalCode, i64)> = sqlx::query_as(
            r"
            SELECT postal_code, COUNT(*) AS request_count
            FROM access_logs
            GROUP BY postal_code
            ORDER BY request_count DESC, postal_code ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(postal_code, request_count)| AccessLogSummary {
                postal_code,
                request_count,
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
