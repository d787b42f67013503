//! Structured site description (schema.org JSON-LD).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue, json};

/// Script type of the JSON-LD payload.
pub const LD_JSON: &str = "application/ld+json";

/// The person the portfolio is about, as a schema.org `Person`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub job_title: String,
    pub description: String,
    pub url: Option<String>,
    pub image: Option<String>,
    /// Profile links (GitHub, LinkedIn, ...)
    pub same_as: Vec<String>,
    pub knows_about: Vec<String>,
    /// Name of the school or organization.
    pub alumni_of: Option<String>,
}

impl Person {
    /// Build the JSON-LD document. Empty fields are left out.
    pub fn to_json_ld(&self) -> JsonValue {
        let mut doc = Map::new();
        doc.insert("@context".into(), json!("https://schema.org"));
        doc.insert("@type".into(), json!("Person"));
        doc.insert("name".into(), json!(self.name));

        let mut put = |key: &str, value: &str| {
            if !value.is_empty() {
                doc.insert(key.into(), json!(value));
            }
        };
        put("jobTitle", &self.job_title);
        put("description", &self.description);
        put("url", self.url.as_deref().unwrap_or_default());
        put("image", self.image.as_deref().unwrap_or_default());

        if !self.same_as.is_empty() {
            doc.insert("sameAs".into(), json!(self.same_as));
        }
        if !self.knows_about.is_empty() {
            doc.insert("knowsAbout".into(), json!(self.knows_about));
        }
        if let Some(org) = &self.alumni_of {
            doc.insert(
                "alumniOf".into(),
                json!({ "@type": "Organization", "name": org }),
            );
        }

        JsonValue::Object(doc)
    }

    /// Serialized payload for the `<script>` body.
    pub fn render(&self) -> String {
        self.to_json_ld().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_ld_shape() {
        let person = Person {
            name: "Jane Doe".into(),
            job_title: "Full Stack Developer".into(),
            url: Some("https://jane.dev".into()),
            same_as: vec!["https://github.com/jane".into()],
            alumni_of: Some("State University".into()),
            ..Default::default()
        };
        let doc = person.to_json_ld();

        assert_eq!(doc["@context"], "https://schema.org");
        assert_eq!(doc["@type"], "Person");
        assert_eq!(doc["jobTitle"], "Full Stack Developer");
        assert_eq!(doc["sameAs"][0], "https://github.com/jane");
        assert_eq!(doc["alumniOf"]["@type"], "Organization");
        assert_eq!(doc["alumniOf"]["name"], "State University");
        // Empty fields are omitted
        assert!(doc.get("description").is_none());
        assert!(doc.get("knowsAbout").is_none());
    }

    #[test]
    fn test_render_keeps_context_first() {
        let person = Person {
            name: "Jane".into(),
            ..Default::default()
        };
        assert!(person.render().starts_with(r#"{"@context":"https://schema.org""#));
    }
}
