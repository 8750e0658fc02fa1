//! Async driver wiring the form state machine to the HTTP client.

use crate::client::RegistrationClient;
use crate::state::{Field, RegistrationForm};
use crate::types::SubmitOutcome;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

/// How long the success indicator stays up before auto-clearing.
pub const SUCCESS_CLEAR_DELAY: Duration = Duration::from_secs(5);

/// A live form session: shared form state, the API client, and the pending
/// success-clear timer.
///
/// The timer is keyed to the success transition and runs as a spawned task.
/// Submitting again does not cancel an earlier timer; a stale firing is a
/// no-op because `clear_success` only acts on the succeeded state. Tearing
/// the session down aborts the pending timer so it cannot touch state that
/// no longer has an owner.
pub struct FormSession {
    form: Arc<Mutex<RegistrationForm>>,
    client: RegistrationClient,
    clear_task: Option<JoinHandle<()>>,
}

impl FormSession {
    /// Create a session with an empty form.
    pub fn new(client: RegistrationClient) -> Self {
        Self {
            form: Arc::new(Mutex::new(RegistrationForm::new())),
            client,
            clear_task: None,
        }
    }

    /// Apply a field edit.
    pub async fn edit(&self, field: Field, value: impl Into<String>) {
        self.form.lock().await.edit(field, value);
    }

    /// Current form state (cloned snapshot for display).
    pub async fn snapshot(&self) -> RegistrationForm {
        self.form.lock().await.clone()
    }

    /// Run one submission: snapshot the fields, send them, apply the
    /// outcome, and on success schedule the indicator auto-clear.
    ///
    /// The caller is expected to disable the submit control while
    /// `is_submitting` is true, so at most one request is outstanding.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let fields = self.form.lock().await.begin_submit();
        let outcome = self.client.submit(&fields).await;
        self.form.lock().await.resolve(outcome.clone());

        if matches!(outcome, SubmitOutcome::Created(_)) {
            self.schedule_success_clear();
        }

        outcome
    }

    fn schedule_success_clear(&mut self) {
        let form = Arc::clone(&self.form);
        // Replacing the handle detaches any earlier timer; it stays running
        // and its firing is a no-op.
        self.clear_task = Some(tokio::spawn(async move {
            tokio::time::sleep(SUCCESS_CLEAR_DELAY).await;
            debug!("Success indicator auto-clear fired");
            form.lock().await.clear_success();
        }));
    }
}

impl Drop for FormSession {
    fn drop(&mut self) {
        if let Some(task) = self.clear_task.take() {
            task.abort();
        }
    }
}
