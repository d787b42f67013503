//! `[seo]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [seo.default]
//! title = "Jane Doe - Portfolio"
//! description = "Full-stack developer portfolio"
//! og_image = "/images/logo.svg"
//! canonical_url = "https://jane.dev"
//!
//! [seo.sections.about]
//! title = "About Jane Doe"
//! description = "Background and experience"
//! keywords = "Jane Doe, About, Experience"
//! og_title = "About Jane"
//! canonical_url = "https://jane.dev/#about"
//!
//! [seo.person]
//! name = "Jane Doe"
//! job_title = "Full Stack Developer"
//! same_as = ["https://github.com/jane"]
//! ```

use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::site::validate_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::SectionId;
use crate::seo::{MetadataRecord, Person};

/// Section metadata table and structured site description.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "seo")]
pub struct SeoConfig {
    /// Record used for sections without their own entry.
    #[config(skip)]
    pub default: MetadataRecord,

    /// Records per section id.
    #[config(skip)]
    pub sections: FxHashMap<String, MetadataRecord>,

    /// Person described by the JSON-LD payload on the home section.
    #[config(skip)]
    pub person: Option<Person>,
}

impl SeoConfig {
    /// Validate URLs of every record and flag records for unknown sections.
    pub fn validate(&self, known: &[SectionId], diag: &mut ConfigDiagnostics) {
        Self::validate_record("seo.default", &self.default, diag);

        // Stable report order
        let mut ids: Vec<_> = self.sections.keys().collect();
        ids.sort();

        for id in ids {
            let prefix = format!("seo.sections.{id}");
            Self::validate_record(&prefix, &self.sections[id], diag);

            if !known.iter().any(|s| s == id.as_str()) {
                diag.warn(
                    FieldPath::dynamic(prefix),
                    "section is not listed in `spy.sections` and will never become active",
                );
            }
        }

        if let Some(person) = &self.person {
            if person.name.trim().is_empty() {
                diag.error(
                    FieldPath::new("seo.person.name"),
                    "structured data requires a name",
                );
            }
            if let Some(url) = &person.url {
                validate_http_url(url, FieldPath::new("seo.person.url"), diag);
            }
        }
    }

    fn validate_record(prefix: &str, record: &MetadataRecord, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &record.canonical_url {
            validate_http_url(
                url,
                FieldPath::dynamic(format!("{prefix}.canonical_url")),
                diag,
            );
        }
    }
}
