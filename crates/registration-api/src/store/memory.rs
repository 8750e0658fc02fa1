//! In-memory submission storage.

use super::{NewRegistration, Registration};
use crate::error::ApiError;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory store for tests or when persistence is disabled.
///
/// Mirrors the database contract: ids are assigned monotonically and email
/// uniqueness is enforced on insert.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    records: Vec<Registration>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a registration, rejecting duplicate emails.
    pub async fn insert(&self, new: &NewRegistration) -> Result<Registration, ApiError> {
        let mut inner = self.inner.lock().await;

        if inner.records.iter().any(|r| r.email == new.email) {
            return Err(ApiError::DuplicateEmail);
        }

        inner.next_id += 1;
        let record = Registration {
            id: inner.next_id,
            name: new.name.clone(),
            phone: new.phone.clone(),
            email: new.email.clone(),
            created_at: Utc::now(),
        };
        inner.records.push(record.clone());

        debug!(id = record.id, "Memory store: inserted registration");
        Ok(record)
    }

    /// Number of stored records.
    pub async fn count(&self) -> usize {
        self.inner.lock().await.records.len()
    }
}
