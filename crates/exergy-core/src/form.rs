//! Contact Form State
//!
//! Idle ──begin_submit──▶ Submitting ──complete──▶ Idle
//!
//! While `Submitting`, further `begin_submit` calls are rejected so a
//! double click cannot send the message twice.

use crate::contact::{ContactSubmission, Field};
use crate::error::{ContactError, Result};
use crate::notice::Notice;
use crate::relay::{EmailRelay, RelayStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// Form fields plus submit progress
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    state: SubmitState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn get(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub const fn state(&self) -> SubmitState {
        self.state
    }

    pub const fn is_submitting(&self) -> bool {
        matches!(self.state, SubmitState::Submitting)
    }

    pub const fn button_label(&self) -> &'static str {
        if self.is_submitting() { "Sending..." } else { "Submit" }
    }

    /// Start a submission, returning the snapshot to hand to the relay
    pub fn begin_submit(&mut self) -> Result<ContactSubmission> {
        if self.is_submitting() {
            return Err(ContactError::InFlight);
        }
        self.fields.validate()?;
        self.state = SubmitState::Submitting;
        Ok(self.fields.clone())
    }

    /// Resolve the in-flight submission with the relay outcome.
    ///
    /// Fields are cleared only when the relay accepted the message.
    pub fn complete(&mut self, outcome: Result<RelayStatus>) -> Notice {
        self.state = SubmitState::Idle;

        match outcome.and_then(RelayStatus::into_result) {
            Ok(status) => {
                tracing::info!(status = status.status, "Contact submission accepted");
                self.fields.clear();
                Notice::sent()
            }
            Err(e) => {
                tracing::error!("Email relay error: {}", e);
                Notice::error(e.user_message())
            }
        }
    }

    /// Validate, send through `relay` and resolve in one go
    pub async fn submit<R>(&mut self, relay: &R) -> Result<Notice>
    where
        R: EmailRelay + ?Sized,
    {
        let submission = self.begin_submit()?;
        tracing::debug!(relay = relay.name(), "Submitting contact form");
        let outcome = relay.send(&submission).await;
        Ok(self.complete(outcome))
    }
}
