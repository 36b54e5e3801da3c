//! Relay Configuration
//!
//! EmailJS identifiers are public by design and are compiled into the
//! bundle. Each one can be overridden at build time through an
//! `EXERGY_EMAILJS_*` environment variable.

use serde::{Deserialize, Serialize};

use crate::error::{ContactError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_SERVICE_ID: &str = "service_88mykdn";
pub const DEFAULT_TEMPLATE_ID: &str = "template_ob6vjap";
pub const DEFAULT_PUBLIC_KEY: &str = "s_9t3BpECERoZ008T";

/// EmailJS account identifiers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// REST endpoint accepting JSON sends
    pub endpoint: String,

    /// Email service (the outgoing mailbox) configured in EmailJS
    pub service_id: String,

    /// Template that formats the submission
    pub template_id: String,

    /// Public key, sent as `user_id`
    pub public_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            service_id: DEFAULT_SERVICE_ID.into(),
            template_id: DEFAULT_TEMPLATE_ID.into(),
            public_key: DEFAULT_PUBLIC_KEY.into(),
        }
    }
}

impl RelayConfig {
    /// Identifiers baked in at compile time
    pub fn embedded() -> Self {
        Self {
            endpoint: option_env!("EXERGY_EMAILJS_ENDPOINT")
                .unwrap_or(DEFAULT_ENDPOINT)
                .into(),
            service_id: option_env!("EXERGY_EMAILJS_SERVICE_ID")
                .unwrap_or(DEFAULT_SERVICE_ID)
                .into(),
            template_id: option_env!("EXERGY_EMAILJS_TEMPLATE_ID")
                .unwrap_or(DEFAULT_TEMPLATE_ID)
                .into(),
            public_key: option_env!("EXERGY_EMAILJS_PUBLIC_KEY")
                .unwrap_or(DEFAULT_PUBLIC_KEY)
                .into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("endpoint", &self.endpoint),
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ContactError::Config(format!("{name} is empty")));
            }
        }
        if !self.endpoint.starts_with("https://") && !self.endpoint.starts_with("http://") {
            return Err(ContactError::Config(format!(
                "endpoint must be an http(s) URL, got {}",
                self.endpoint
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RelayConfig::default();
        assert_eq!(config.service_id, "service_88mykdn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_identifier_rejected() {
        let config = RelayConfig {
            template_id: " ".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ContactError::Config(msg) if msg.contains("template_id")));
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let config = RelayConfig {
            endpoint: "ftp://relay".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
