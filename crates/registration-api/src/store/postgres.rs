//! Postgres-backed submission storage.

use super::{NewRegistration, Registration};
use crate::error::ApiError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info};

/// Relational store backed by a sqlx connection pool.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connect to the database and apply embedded migrations.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, ApiError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| ApiError::Internal(format!("migration failed: {}", e)))?;

        info!("Connected to Postgres (max_connections: {})", max_connections);
        Ok(Self { pool })
    }

    /// Create a store from an existing pool.
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a registration row, relying on the unique index on email to
    /// arbitrate duplicates.
    pub async fn insert(&self, new: &NewRegistration) -> Result<Registration, ApiError> {
        let result = sqlx::query_as::<_, Registration>(
            "INSERT INTO registrations (name, phone, email) \
             VALUES ($1, $2, $3) \
             RETURNING id, name, phone, email, created_at",
        )
        .bind(&new.name)
        .bind(&new.phone)
        .bind(&new.email)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(record) => {
                debug!(id = record.id, "Inserted registration row");
                Ok(record)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(ApiError::DuplicateEmail)
            }
            Err(e) => Err(ApiError::Database(e)),
        }
    }
}
