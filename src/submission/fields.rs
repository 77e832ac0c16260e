use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

pub const NAME_FIELD: &str = "nama";
pub const EMAIL_FIELD: &str = "email";
pub const PHONE_FIELD: &str = "telepon";
pub const MESSAGE_FIELD: &str = "pesan";
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Same shape the contact page checks on blur: `local@domain.tld`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A contact form submission with its required fields present.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub timestamp: Option<String>,
}

/// Pull the contact fields out of a parsed body. Returns the names of the
/// required fields that are missing or blank.
pub fn extract(raw: &Value) -> Result<ContactSubmission, Vec<&'static str>> {
    let name = text_field(raw, NAME_FIELD);
    let email = text_field(raw, EMAIL_FIELD);
    let message = text_field(raw, MESSAGE_FIELD);

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) => Ok(ContactSubmission {
            name,
            email,
            phone: text_field(raw, PHONE_FIELD).unwrap_or_default(),
            message,
            timestamp: text_field(raw, TIMESTAMP_FIELD),
        }),
        (name, email, message) => {
            let mut missing = Vec::new();
            if name.is_none() {
                missing.push(NAME_FIELD);
            }
            if email.is_none() {
                missing.push(EMAIL_FIELD);
            }
            if message.is_none() {
                missing.push(MESSAGE_FIELD);
            }
            Err(missing)
        }
    }
}

/// Read a field as text. Absent, null, blank, `false`, `0`, objects and arrays
/// count as missing.
fn text_field(raw: &Value, field: &str) -> Option<String> {
    match raw.get(field)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Format checks that are logged but never reject a submission.
pub fn validate_fields(submission: &ContactSubmission) -> Vec<String> {
    let mut warnings = Vec::new();

    if !is_valid_email(&submission.email) {
        warnings.push(format!("Invalid email format: {EMAIL_FIELD}"));
    }

    if submission.timestamp.is_none() {
        warnings.push(format!("Missing field: {TIMESTAMP_FIELD}"));
    }

    warnings
}
