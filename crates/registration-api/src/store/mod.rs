//! Submission persistence.
//!
//! The handler talks to [`Store`], which dispatches to a Postgres backend in
//! production or an in-memory backend for tests and persistence-disabled
//! deployments. Email uniqueness is enforced here, not in the handler: the
//! backend is the authority that arbitrates two concurrent submissions with
//! the same email — exactly one insert wins, the other surfaces as a
//! duplicate-email error.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use crate::error::ApiError;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted registration record.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Registration {
    /// Server-assigned identifier
    pub id: i64,

    /// Full name, trimmed
    pub name: String,

    /// Phone number as submitted (trimmed, separators kept)
    pub phone: String,

    /// Email address, unique across all records
    pub email: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// A validated submission ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Storage backend for submissions.
pub enum Store {
    /// Relational storage via sqlx
    Postgres(PostgresStore),
    /// In-memory only (no persistence)
    Memory(MemoryStore),
}

impl Store {
    /// Create an in-memory store.
    pub fn memory() -> Self {
        Store::Memory(MemoryStore::new())
    }

    /// Connect to Postgres and run pending migrations.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, ApiError> {
        Ok(Store::Postgres(
            PostgresStore::connect(url, max_connections).await?,
        ))
    }

    /// Insert a new registration, returning the persisted record.
    ///
    /// Returns [`ApiError::DuplicateEmail`] if the email is already present.
    pub async fn insert(&self, new: &NewRegistration) -> Result<Registration, ApiError> {
        match self {
            Store::Postgres(store) => store.insert(new).await,
            Store::Memory(store) => store.insert(new).await,
        }
    }
}
