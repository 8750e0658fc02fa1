//! Registration form client.
//!
//! The form component split into a pure state machine ([`RegistrationForm`]),
//! an HTTP client for the submission endpoint ([`RegistrationClient`]), and
//! an async driver tying the two together ([`FormSession`]).

mod client;
mod error;
mod session;
mod state;
mod types;

pub use client::RegistrationClient;
pub use error::FormError;
pub use session::{FormSession, SUCCESS_CLEAR_DELAY};
pub use state::{
    Field, FormFields, FormState, RegistrationForm, CONNECTION_ERROR_MESSAGE,
    FALLBACK_FAILURE_MESSAGE,
};
pub use types::{Registration, SubmitOutcome, SubmitResponseBody};
