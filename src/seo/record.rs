//! Per-section metadata records and partial overrides.

use serde::{Deserialize, Serialize};

/// Title, description and social-preview fields of one section.
///
/// Optional social fields fall back to the plain fields when rendered,
/// see the accessor methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataRecord {
    pub title: String,
    pub description: String,
    pub keywords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
}

impl MetadataRecord {
    /// `og:title`, falling back to the page title.
    pub fn og_title(&self) -> &str {
        self.og_title.as_deref().unwrap_or(&self.title)
    }

    /// `og:description`, falling back to the description.
    pub fn og_description(&self) -> &str {
        self.og_description.as_deref().unwrap_or(&self.description)
    }

    /// `twitter:title` → `og:title` → title.
    pub fn twitter_title(&self) -> &str {
        self.twitter_title.as_deref().unwrap_or_else(|| self.og_title())
    }

    /// `twitter:description` → `og:description` → description.
    pub fn twitter_description(&self) -> &str {
        self.twitter_description
            .as_deref()
            .unwrap_or_else(|| self.og_description())
    }

    /// Shallow merge: every field set in `over` replaces ours.
    pub fn merged(&self, over: &MetadataOverride) -> Self {
        fn pick(base: &Option<String>, over: &Option<String>) -> Option<String> {
            over.clone().or_else(|| base.clone())
        }

        Self {
            title: over.title.clone().unwrap_or_else(|| self.title.clone()),
            description: over
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            keywords: over
                .keywords
                .clone()
                .unwrap_or_else(|| self.keywords.clone()),
            og_title: pick(&self.og_title, &over.og_title),
            og_description: pick(&self.og_description, &over.og_description),
            og_image: pick(&self.og_image, &over.og_image),
            twitter_title: pick(&self.twitter_title, &over.twitter_title),
            twitter_description: pick(&self.twitter_description, &over.twitter_description),
            canonical_url: pick(&self.canonical_url, &over.canonical_url),
        }
    }
}

/// Partial record. Unset fields leave the table entry alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataOverride {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub canonical_url: Option<String>,
}

impl MetadataOverride {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn about() -> MetadataRecord {
        MetadataRecord {
            title: "About Me".into(),
            description: "Background and experience".into(),
            keywords: "about, background".into(),
            og_title: Some("About".into()),
            canonical_url: Some("https://example.dev/#about".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_social_fallback_chain() {
        let record = about();
        assert_eq!(record.og_title(), "About");
        assert_eq!(record.og_description(), "Background and experience");
        assert_eq!(record.twitter_title(), "About");
        assert_eq!(record.twitter_description(), "Background and experience");

        let bare = MetadataRecord {
            title: "Plain".into(),
            ..Default::default()
        };
        assert_eq!(bare.twitter_title(), "Plain");
    }

    #[test]
    fn test_merge_override_wins_field_by_field() {
        let over = MetadataOverride {
            title: Some("Custom".into()),
            og_image: Some("/img/card.png".into()),
            ..Default::default()
        };
        let merged = about().merged(&over);

        assert_eq!(merged.title, "Custom");
        assert_eq!(merged.og_image.as_deref(), Some("/img/card.png"));
        // Untouched fields fall back to the base record
        assert_eq!(merged.description, "Background and experience");
        assert_eq!(merged.og_title.as_deref(), Some("About"));
        assert_eq!(
            merged.canonical_url.as_deref(),
            Some("https://example.dev/#about")
        );
    }

    #[test]
    fn test_merge_empty_override_is_identity() {
        let over = MetadataOverride::default();
        assert!(over.is_empty());
        assert_eq!(about().merged(&over), about());
    }

    #[test]
    fn test_record_toml_skips_missing_optionals() {
        let record: MetadataRecord =
            toml::from_str("title = \"Projects\"\ncanonical_url = \"https://x.dev/#projects\"")
                .unwrap();
        assert_eq!(record.title, "Projects");
        assert!(record.keywords.is_empty());
        assert!(record.og_image.is_none());
        assert_eq!(
            record.canonical_url.as_deref(),
            Some("https://x.dev/#projects")
        );
    }
}
