//! Error Types

use thiserror::Error;

use crate::contact::ValidationError;
use crate::notice::FAILED_MESSAGE;

/// Result type alias for contact operations
pub type Result<T> = std::result::Result<T, ContactError>;

/// Contact submission errors
#[derive(Error, Debug)]
pub enum ContactError {
    /// Submission failed the form constraints
    #[error("Invalid submission: {0}")]
    Invalid(#[from] ValidationError),

    /// A previous submission has not resolved yet
    #[error("A submission is already in flight")]
    InFlight,

    /// Relay could not be reached (network, CORS, DNS...)
    #[error("Relay transport error: {0}")]
    Transport(String),

    /// Relay answered but did not accept the message
    #[error("Relay rejected submission ({status}): {text}")]
    Rejected { status: u16, text: String },

    /// Relay identifiers missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ContactError {
    /// Check if resubmitting the same form could succeed
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Rejected { .. } | Self::InFlight)
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(err) => err.to_string(),
            Self::InFlight => "Your message is still being sent.".into(),
            Self::Transport(_) | Self::Rejected { .. } => FAILED_MESSAGE.into(),
            Self::Config(_) => "The contact form is not available right now.".into(),
        }
    }
}

impl From<reqwest::Error> for ContactError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Field;

    #[test]
    fn test_retryable_classification() {
        assert!(ContactError::Transport("offline".into()).is_retryable());
        assert!(ContactError::Rejected { status: 400, text: "bad".into() }.is_retryable());
        assert!(!ContactError::Config("missing".into()).is_retryable());
        assert!(!ContactError::Invalid(ValidationError::Missing(Field::Name)).is_retryable());
    }

    #[test]
    fn test_user_message_for_relay_failures() {
        let err = ContactError::Rejected { status: 412, text: "quota".into() };
        assert!(err.user_message().starts_with("Failed to send message"));
        assert!(!err.user_message().contains("quota"));
    }
}
