//! Registration submission API.
//!
//! A single-endpoint service that:
//! - Validates a (name, phone, email) triple against field-specific rules
//! - Persists valid submissions as rows in a relational table
//! - Rejects duplicate email addresses with a conflict response

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod validation;

pub use config::Config;
pub use error::ApiError;
pub use store::{MemoryStore, NewRegistration, PostgresStore, Registration, Store};
