//! Pure form state machine.
//!
//! The mutable UI state (field values, in-flight flag, success flag, error
//! list) is modeled as an explicit state value updated via pure transitions,
//! so every behavior is testable without a runtime or a server.

use crate::types::SubmitOutcome;
use serde::Serialize;

/// Displayed when the server fails without a specific violation list.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Registration failed. Please try again.";

/// Displayed when no response could be obtained at all.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Unable to connect to server. Please try again later.";

/// The three form fields. Serializes as the submission request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormFields {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Which field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
}

/// Display state of the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    /// Nothing in flight, nothing to show
    Idle,
    /// A request is in flight; inputs and submit control are disabled
    Submitting,
    /// Last submission succeeded; success indicator is showing
    Succeeded,
    /// Last submission failed; the ordered error messages are showing
    Failed(Vec<String>),
}

/// The registration form: field values plus display state.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    fields: FormFields,
    state: FormState,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    /// Create an empty idle form.
    pub fn new() -> Self {
        Self {
            fields: FormFields::default(),
            state: FormState::Idle,
        }
    }

    /// Current field values.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Current display state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Error messages currently displayed (empty unless failed).
    pub fn errors(&self) -> &[String] {
        match &self.state {
            FormState::Failed(errors) => errors,
            _ => &[],
        }
    }

    /// Whether a request is in flight (inputs and submit disabled).
    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Whether the success indicator is showing.
    pub fn is_succeeded(&self) -> bool {
        self.state == FormState::Succeeded
    }

    /// Update one field. Displayed errors are cleared so the user edits
    /// without stale error text.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Phone => self.fields.phone = value,
            Field::Email => self.fields.email = value,
        }
        if matches!(self.state, FormState::Failed(_)) {
            self.state = FormState::Idle;
        }
    }

    /// Enter the submitting state, clearing previous errors and success.
    /// Returns a snapshot of the fields to send.
    pub fn begin_submit(&mut self) -> FormFields {
        self.state = FormState::Submitting;
        self.fields.clone()
    }

    /// Apply the settled outcome of a submission.
    pub fn resolve(&mut self, outcome: SubmitOutcome) {
        self.state = match outcome {
            SubmitOutcome::Created(_) => {
                self.fields = FormFields::default();
                FormState::Succeeded
            }
            SubmitOutcome::Rejected(errors) if !errors.is_empty() => FormState::Failed(errors),
            SubmitOutcome::Rejected(_) => {
                FormState::Failed(vec![FALLBACK_FAILURE_MESSAGE.to_string()])
            }
            SubmitOutcome::Failed(message) => FormState::Failed(vec![message]),
            SubmitOutcome::Unreachable => {
                FormState::Failed(vec![CONNECTION_ERROR_MESSAGE.to_string()])
            }
        };
    }

    /// Dismiss the success indicator. A no-op in any other state, so a
    /// stale timer firing after further activity is harmless.
    pub fn clear_success(&mut self) {
        if self.state == FormState::Succeeded {
            self.state = FormState::Idle;
        }
    }
}
