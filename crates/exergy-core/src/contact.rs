//! Contact Submission
//!
//! The five-field record a visitor fills in, plus the same checks the
//! browser applies through `required` and `type="email"`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field of the contact form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Company,
    Phone,
    Email,
    Message,
}

impl Field {
    /// Fields in form order
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Company,
        Self::Phone,
        Self::Email,
        Self::Message,
    ];

    /// Form control name, also the template parameter key
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Company => "company",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Company => "Company",
            Self::Phone => "Phone Number",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John",
            Self::Company => "Example Corp",
            Self::Phone => "+31 6 12345678",
            Self::Email => "john@example.com",
            Self::Message => "Tell us about your project...",
        }
    }

    /// HTML `type` attribute for `<input>` controls
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Phone => "tel",
            Self::Email => "email",
            Self::Name | Self::Company | Self::Message => "text",
        }
    }

    /// Phone is the only optional field
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Phone)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons a submission is blocked before it reaches the relay
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in the {0} field.")]
    Missing(Field),

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Values entered into the contact form
///
/// Serializes to the flat `{name, company, phone, email, message}` object the
/// relay template expects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub company: String,
    #[serde(default)]
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Company => &self.company,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Company => &mut self.company,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Check required fields and the email format, reporting the first
    /// failure in form order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in Field::ALL {
            if field.is_required() && self.get(field).trim().is_empty() {
                return Err(ValidationError::Missing(field));
            }
            if field == Field::Email && !is_valid_email(self.email.trim()) {
                return Err(ValidationError::InvalidEmail);
            }
        }
        Ok(())
    }
}

/// HTML "valid e-mail address" production:
/// `1*( atext / "." ) "@" label *( "." label )`, where a label is 1-63
/// alphanumerics or hyphens, not starting or ending with a hyphen.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));

    local_ok && !domain.is_empty() && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= 63
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactSubmission {
        ContactSubmission::new()
            .with(Field::Name, "John")
            .with(Field::Company, "Example Corp")
            .with(Field::Email, "john@example.com")
            .with(Field::Message, "We run three spray dryers.")
    }

    #[test]
    fn test_phone_is_optional() {
        assert!(filled().validate().is_ok());
        assert!(!Field::Phone.is_required());
    }

    #[test]
    fn test_each_required_field_blocks_submission() {
        for field in [Field::Name, Field::Company, Field::Email, Field::Message] {
            let submission = filled().with(field, "");
            assert_eq!(submission.validate(), Err(ValidationError::Missing(field)));
        }
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let submission = filled().with(Field::Company, "   ");
        assert_eq!(
            submission.validate(),
            Err(ValidationError::Missing(Field::Company))
        );
    }

    #[test]
    fn test_first_missing_field_reported() {
        let submission = ContactSubmission::new();
        assert_eq!(
            submission.validate(),
            Err(ValidationError::Missing(Field::Name))
        );
    }

    #[test]
    fn test_malformed_email_rejected() {
        let submission = filled().with(Field::Email, "john.example.com");
        assert_eq!(submission.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_email_grammar() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("first.last+tag@mail.example-corp.nl"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john@"));
        assert!(!is_valid_email("john@-example.com"));
        assert!(!is_valid_email("john@example..com"));
        assert!(!is_valid_email("jo hn@example.com"));
        assert!(!is_valid_email(&format!("x@{}.com", "a".repeat(64))));
    }

    #[test]
    fn test_email_surrounding_whitespace_ignored() {
        let submission = filled().with(Field::Email, "  john@example.com ");
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn test_serializes_as_template_params() {
        let value = serde_json::to_value(filled()).unwrap();
        assert_eq!(value["name"], "John");
        assert_eq!(value["phone"], "");
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_clear() {
        let mut submission = filled();
        assert!(!submission.is_empty());
        submission.clear();
        assert!(submission.is_empty());
    }
}
