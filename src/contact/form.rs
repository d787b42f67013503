//! Contact form payload and validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ContactError;

/// `local@domain.tld`, no whitespace. `\s` is Unicode-aware (`unicode-perl`).
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Raw form as posted by the page. Absent fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Parse a JSON request body.
    pub fn from_json(body: &[u8]) -> Result<Self, ContactError> {
        serde_json::from_slice(body).map_err(|_| ContactError::InvalidBody)
    }

    /// Trim every field and check the form is complete.
    pub fn validate(self) -> Result<Self, ContactError> {
        let form = Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        };

        if [&form.name, &form.email, &form.subject, &form.message]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&form.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(form)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
