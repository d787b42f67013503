//! `[spy]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [spy]
//! sections = ["home", "about", "resume", "projects", "contact"]
//! offset = 100.0      # Added to the scroll offset before testing sections
//! threshold = 0.3     # Fraction of the viewport height, within [0, 1]
//! ```
//!
//! `sections` must list the section ids in document order; the first entry
//! is the initial active section and carries the structured site description.

use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::core::SectionId;
use crate::spy::{DEFAULT_OFFSET, DEFAULT_THRESHOLD, SpyOptions};

/// Section tracking settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "spy")]
pub struct SpyConfig {
    /// Section ids in document order.
    #[config(default = r#"["home", "about", "resume", "projects", "contact"]"#)]
    pub sections: Vec<SectionId>,

    /// Distance added to the scroll offset.
    #[config(default = "100.0", inline_doc)]
    pub offset: f64,

    /// Fraction of the viewport height subtracted from section bounds.
    #[config(default = "0.3", inline_doc)]
    pub threshold: f64,
}

impl Default for SpyConfig {
    fn default() -> Self {
        Self {
            sections: SectionId::defaults(),
            offset: DEFAULT_OFFSET,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SpyConfig {
    pub fn options(&self) -> SpyOptions {
        SpyOptions {
            offset: self.offset,
            threshold: self.threshold,
        }
    }

    /// First section (home), if any.
    pub fn home(&self) -> Option<&SectionId> {
        self.sections.first()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.sections.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.sections,
                "at least one section is required",
                "e.g.: sections = [\"home\", \"about\", \"contact\"]",
            );
        }

        let mut seen = FxHashSet::default();
        for id in &self.sections {
            if id.as_str().trim().is_empty() {
                diag.error(Self::FIELDS.sections, "section ids must not be empty");
            } else if !seen.insert(id.as_str()) {
                diag.error(
                    Self::FIELDS.sections,
                    format!("section `{}` is listed more than once", id),
                );
            }
        }

        if !self.offset.is_finite() {
            diag.error(Self::FIELDS.offset, "offset must be a finite number");
        }

        if !(0.0..=1.0).contains(&self.threshold) {
            diag.error_with_hint(
                Self::FIELDS.threshold,
                format!("threshold {} is outside [0, 1]", self.threshold),
                format!("the default is {}", DEFAULT_THRESHOLD),
            );
        }
    }
}
