//! Database operations for the access log `PostgreSQL`.
//!
//! ## Tables
//!
//! - `access_logs` - One row per `/address` request (`postal_code`, `created_at`)
//!
//! The table is not created by this service. Its expected shape is kept in
//! `crates/server/migrations/0001_access_logs.sql`.

pub mod access_logs;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use postal_lookup_core::{AccessLogSummary, PostalCode};

use crate::config::DatabaseConfig;

pub use access_logs::AccessLogRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage for the request access log.
///
/// Handlers depend on this trait rather than on `PgPool` directly so the
/// HTTP layer can be exercised without a database.
#[async_trait]
pub trait AccessLogStore: Send + Sync {
    /// Append one access log row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on any connectivity or constraint failure.
    async fn record_access(
        &self,
        postal_code: &PostalCode,
        created_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;

    /// Request counts per postal code, highest count first, ties by postal
    /// code ascending.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query or row decoding fails.
    async fn summarize_access(&self) -> Result<Vec<AccessLogSummary>, RepositoryError>;

    /// Check that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store cannot be reached.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(config.connect_options())
        .await
}
