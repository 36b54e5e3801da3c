//! Email Relay Strategy
//!
//! The hosted service that actually delivers a contact submission to the
//! company inbox. The form only sees the `EmailRelay` trait; `EmailJsRelay`
//! talks to the EmailJS REST API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::RelayConfig;
use crate::contact::ContactSubmission;
use crate::error::{ContactError, Result};

/// Status the relay answered with
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayStatus {
    /// HTTP status code
    pub status: u16,

    /// Response body, `"OK"` on success
    pub text: String,
}

impl RelayStatus {
    pub fn new(status: u16, text: impl Into<String>) -> Self {
        Self {
            status,
            text: text.into(),
        }
    }

    /// Only 200 means the message was queued for delivery
    pub const fn is_accepted(&self) -> bool {
        self.status == 200
    }

    /// Turn a non-accepted status into an error
    pub fn into_result(self) -> Result<Self> {
        if self.is_accepted() {
            Ok(self)
        } else {
            Err(ContactError::Rejected {
                status: self.status,
                text: self.text,
            })
        }
    }
}

/// Strategy trait for email relays
///
/// Browser futures are not `Send`, so the bound is relaxed on wasm32.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait EmailRelay {
    /// Hand one submission to the relay.
    ///
    /// `Err` is reserved for failures to reach the relay at all; any answer
    /// it gives, accepted or not, comes back as a `RelayStatus`.
    async fn send(&self, submission: &ContactSubmission) -> Result<RelayStatus>;

    /// Relay name for diagnostics
    fn name(&self) -> &str;
}

/// JSON body of `POST /api/v1.0/email/send`
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactSubmission,
}

/// EmailJS REST client
pub struct EmailJsRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl EmailJsRelay {
    /// Create a relay, rejecting blank identifiers up front
    pub fn new(config: RelayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    /// Create with the identifiers compiled into this build
    pub fn embedded() -> Result<Self> {
        Self::new(RelayConfig::embedded())
    }

    pub const fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Build the request body for a submission
    pub fn request_body<'a>(&'a self, submission: &'a ContactSubmission) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: submission,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, submission: &ContactSubmission) -> Result<RelayStatus> {
        tracing::debug!(
            service = %self.config.service_id,
            template = %self.config.template_id,
            "Sending contact submission"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&self.request_body(submission))
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        tracing::debug!(status, %text, "Relay responded");
        Ok(RelayStatus { status, text })
    }

    fn name(&self) -> &str {
        "EmailJS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Field;

    #[test]
    fn test_only_200_is_accepted() {
        assert!(RelayStatus::new(200, "OK").is_accepted());
        assert!(!RelayStatus::new(202, "Accepted").is_accepted());
        assert!(!RelayStatus::new(400, "The template ID is invalid").is_accepted());
    }

    #[test]
    fn test_into_result_keeps_status_text() {
        let err = RelayStatus::new(412, "quota exceeded").into_result().unwrap_err();
        assert!(matches!(
            err,
            ContactError::Rejected { status: 412, ref text } if text == "quota exceeded"
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let relay = EmailJsRelay::new(RelayConfig::default()).unwrap();
        let submission = ContactSubmission::new()
            .with(Field::Name, "John")
            .with(Field::Email, "john@example.com");

        let body = serde_json::to_value(relay.request_body(&submission)).unwrap();
        assert_eq!(body["service_id"], "service_88mykdn");
        assert_eq!(body["template_id"], "template_ob6vjap");
        assert_eq!(body["user_id"], "s_9t3BpECERoZ008T");
        assert_eq!(body["template_params"]["name"], "John");
        assert_eq!(body["template_params"]["email"], "john@example.com");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RelayConfig {
            public_key: String::new(),
            ..Default::default()
        };
        assert!(matches!(EmailJsRelay::new(config), Err(ContactError::Config(_))));
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_transport_error() {
        let relay = EmailJsRelay::new(RelayConfig {
            endpoint: "http://127.0.0.1:9/api/v1.0/email/send".into(),
            ..Default::default()
        })
        .unwrap();

        let result = relay.send(&ContactSubmission::new()).await;
        assert!(matches!(result, Err(ContactError::Transport(_))));
    }
}
