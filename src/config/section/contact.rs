//! `[contact]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [contact]
//! enable = true
//! endpoint = "/api/send-email"
//! sender = "mailer@jane.dev"       # or env FOLIO_MAIL_SENDER
//! recipient = "jane@jane.dev"      # or env FOLIO_CONTACT_EMAIL
//! outbox = "outbox"                # Rendered emails land here
//! min_interval = 60                # Seconds between submissions per client
//! signature = "Jane Doe"
//! allow_origin = "*"
//! dry_run = false                  # Log emails instead of writing them
//! ```

use std::path::PathBuf;

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Environment fallback for `contact.sender`.
pub const SENDER_ENV: &str = "FOLIO_MAIL_SENDER";
/// Environment fallback for `contact.recipient`.
pub const RECIPIENT_ENV: &str = "FOLIO_CONTACT_EMAIL";

/// Contact form relay settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "contact")]
pub struct ContactConfig {
    /// Serve the contact endpoint.
    #[config(default = "true", inline_doc)]
    pub enable: bool,

    /// Request path of the endpoint.
    #[config(default = "/api/send-email", inline_doc)]
    pub endpoint: String,

    /// Address the emails are sent from.
    #[config(inline_doc)]
    pub sender: Option<String>,

    /// Address that receives contact notifications.
    #[config(inline_doc)]
    pub recipient: Option<String>,

    /// Directory the outbox mailer writes to.
    #[config(default = "outbox", inline_doc)]
    pub outbox: PathBuf,

    /// Seconds between accepted submissions from one client.
    #[config(default = "60", inline_doc)]
    pub min_interval: u64,

    /// Name signing the confirmation email.
    #[config(default = "Portfolio", inline_doc)]
    pub signature: String,

    /// Value of `Access-Control-Allow-Origin`.
    #[config(default = "*", inline_doc)]
    pub allow_origin: String,

    /// Log emails instead of writing them to the outbox.
    #[config(inline_doc)]
    pub dry_run: bool,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            enable: true,
            endpoint: "/api/send-email".into(),
            sender: None,
            recipient: None,
            outbox: "outbox".into(),
            min_interval: 60,
            signature: "Portfolio".into(),
            allow_origin: "*".into(),
            dry_run: false,
        }
    }
}

/// Sender and recipient addresses, both resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub sender: String,
    pub recipient: String,
}

impl ContactConfig {
    /// Resolve credentials from config, falling back to the process environment.
    pub fn credentials(&self) -> Option<Credentials> {
        self.credentials_with(|key| std::env::var(key).ok())
    }

    /// Resolve credentials with a custom environment lookup.
    pub fn credentials_with(&self, env: impl Fn(&str) -> Option<String>) -> Option<Credentials> {
        let pick = |value: &Option<String>, key: &str| {
            value
                .clone()
                .or_else(|| env(key))
                .filter(|s| !s.trim().is_empty())
        };
        Some(Credentials {
            sender: pick(&self.sender, SENDER_ENV)?,
            recipient: pick(&self.recipient, RECIPIENT_ENV)?,
        })
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }
        if !self.endpoint.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.endpoint,
                format!("endpoint `{}` must start with `/`", self.endpoint),
                "e.g.: endpoint = \"/api/send-email\"",
            );
        }
        if self.allow_origin.trim().is_empty() {
            diag.error(Self::FIELDS.allow_origin, "allow_origin must not be empty");
        } else if self.allow_origin.chars().any(char::is_control) {
            diag.error(
                Self::FIELDS.allow_origin,
                "allow_origin is sent as a header and must not contain control characters",
            );
        }
        if self.min_interval == 0 {
            diag.warn(
                Self::FIELDS.min_interval,
                "submissions are not rate limited",
            );
        }
        if self.sender.is_none() && self.recipient.is_none() {
            diag.warn(
                Self::FIELDS.recipient,
                format!("not set, `{SENDER_ENV}` and `{RECIPIENT_ENV}` must be provided at runtime"),
            );
        }
    }
}
