//! `[site]` section configuration.
//!
//! Basic information about the portfolio. `title` and `description` are the
//! fallback for `[seo.default]`, `url` is the page location used for `og:url`
//! when a record has no canonical URL.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Jane Doe - Full Stack Developer"
//! author = "Jane Doe"
//! description = "Projects, resume and contact"
//! url = "https://jane.dev"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Site title.
    #[config(inline_doc)]
    pub title: String,

    /// Author name.
    #[config(inline_doc)]
    pub author: String,

    /// Site description.
    #[config(inline_doc)]
    pub description: String,

    /// Public URL of the page (e.g., "https://jane.dev").
    #[config(inline_doc)]
    pub url: Option<String>,

    /// Language code (e.g., "en", "zh-Hans").
    #[config(default = "en", inline_doc)]
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            description: String::new(),
            url: None,
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url_str) = &self.url {
            validate_http_url(url_str, Self::FIELDS.url, diag);
        }
    }
}

/// Report `url_str` unless it parses as an http(s) URL with a host.
pub fn validate_http_url(
    url_str: &str,
    field: crate::config::FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    match url::Url::parse(url_str) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}
