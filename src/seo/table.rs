//! Static section → metadata lookup.

use rustc_hash::FxHashMap;
use std::borrow::Cow;

use super::record::{MetadataOverride, MetadataRecord};
use crate::config::SiteConfig;

/// Metadata table with a default record for unknown sections.
///
/// Loaded once at startup, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct MetadataTable {
    default: MetadataRecord,
    sections: FxHashMap<String, MetadataRecord>,
}

impl MetadataTable {
    pub fn new(default: MetadataRecord) -> Self {
        Self {
            default,
            sections: FxHashMap::default(),
        }
    }

    /// Builder: add the record for one section.
    pub fn with(mut self, section: impl Into<String>, record: MetadataRecord) -> Self {
        self.sections.insert(section.into(), record);
        self
    }

    /// Build from `[seo]`, filling an empty default title/description from `[site]`.
    pub fn from_config(config: &SiteConfig) -> Self {
        let mut default = config.seo.default.clone();
        if default.title.is_empty() {
            default.title = config.site.title.clone();
        }
        if default.description.is_empty() {
            default.description = config.site.description.clone();
        }

        let sections = config
            .seo
            .sections
            .iter()
            .map(|(id, record)| (id.to_string(), record.clone()))
            .collect();

        Self { default, sections }
    }

    /// Record for `section`, or the default record. Never fails.
    pub fn get(&self, section: &str) -> &MetadataRecord {
        self.sections.get(section).unwrap_or(&self.default)
    }

    pub fn contains(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    pub fn default_record(&self) -> &MetadataRecord {
        &self.default
    }

    /// Table lookup merged with an optional override.
    pub fn resolve(
        &self,
        section: &str,
        over: Option<&MetadataOverride>,
    ) -> Cow<'_, MetadataRecord> {
        let base = self.get(section);
        match over {
            Some(over) if !over.is_empty() => Cow::Owned(base.merged(over)),
            _ => Cow::Borrowed(base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn record(title: &str) -> MetadataRecord {
        MetadataRecord {
            title: title.into(),
            ..Default::default()
        }
    }

    fn table() -> MetadataTable {
        MetadataTable::new(record("Default"))
            .with("home", record("Home"))
            .with("projects", record("Projects"))
    }

    #[test]
    fn test_known_section_returns_exact_record() {
        let table = table();
        assert_eq!(table.get("projects"), &record("Projects"));
        assert!(table.contains("home"));
    }

    #[test]
    fn test_unknown_section_falls_back_to_default() {
        let table = table();
        assert_eq!(table.get("blog"), &record("Default"));
        assert_eq!(table.get(""), table.default_record());
    }

    #[test]
    fn test_resolve_merges_override() {
        let table = table();
        let over = MetadataOverride {
            description: Some("Things I built".into()),
            ..Default::default()
        };
        let resolved = table.resolve("projects", Some(&over));
        assert_eq!(resolved.title, "Projects");
        assert_eq!(resolved.description, "Things I built");

        assert!(matches!(table.resolve("projects", None), Cow::Borrowed(_)));
    }

    #[test]
    fn test_from_config_fills_default_from_site() {
        let config = test_parse_config(
            r#"
[seo.sections.about]
title = "About Jane"
"#,
        );
        let table = MetadataTable::from_config(&config);
        assert_eq!(table.get("about").title, "About Jane");
        assert_eq!(table.get("nowhere").title, "Test");
        assert_eq!(table.get("nowhere").description, "Test site");
    }
}
