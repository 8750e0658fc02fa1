//! HTTP client for the submission endpoint.

use crate::error::FormError;
use crate::state::{FormFields, FALLBACK_FAILURE_MESSAGE};
use crate::types::{SubmitOutcome, SubmitResponseBody};
use reqwest::Client;
use tracing::{debug, warn};

/// Client for the registration API.
#[derive(Clone)]
pub struct RegistrationClient {
    client: Client,
    base_url: String,
}

impl RegistrationClient {
    /// Create a new client for the given base API URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FormError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Submit the form fields once and classify how the attempt settled.
    ///
    /// Transport failures and unreadable bodies are folded into
    /// [`SubmitOutcome::Unreachable`] rather than surfaced as errors; the
    /// form layer turns every outcome into display state.
    pub async fn submit(&self, fields: &FormFields) -> SubmitOutcome {
        let response = match self
            .client
            .post(format!("{}/api/submit", self.base_url))
            .json(fields)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Submission request failed to reach the server");
                return SubmitOutcome::Unreachable;
            }
        };

        let status = response.status();
        let body: SubmitResponseBody = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                warn!(error = %e, %status, "Could not read submission response body");
                return SubmitOutcome::Unreachable;
            }
        };

        debug!(%status, success = body.success, "Submission response received");

        if status.is_success() && body.success {
            match body.data {
                Some(record) => SubmitOutcome::Created(record),
                None => SubmitOutcome::Failed(FALLBACK_FAILURE_MESSAGE.to_string()),
            }
        } else if let Some(errors) = body.errors.filter(|e| !e.is_empty()) {
            SubmitOutcome::Rejected(errors)
        } else {
            SubmitOutcome::Failed(
                body.message
                    .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string()),
            )
        }
    }
}
