//! Email Relay Client

use exergy_core::{ContactSubmission, EmailJsRelay, EmailRelay, RelayStatus, Result};
use leptos::logging::error;

/// Send a contact submission through the embedded EmailJS account.
///
/// Failures and rejected statuses are also written to the browser console.
pub async fn send_contact(submission: &ContactSubmission) -> Result<RelayStatus> {
    let outcome = match EmailJsRelay::embedded() {
        Ok(relay) => relay.send(submission).await,
        Err(e) => Err(e),
    };

    match &outcome {
        Ok(status) if !status.is_accepted() => {
            error!("EmailJS error: {} {}", status.status, status.text);
        }
        Err(e) => error!("EmailJS error: {e}"),
        Ok(_) => {}
    }

    outcome
}
