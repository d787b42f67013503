//! In-memory model of the document `<head>`.
//!
//! Elements are kept in insertion order. Meta tags and links are keyed so
//! writes are upserts: an existing element is updated in place, never
//! duplicated.

use std::fmt::Write;

use crate::utils::html::{escape, escape_attr};

/// Identifying attribute of a `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaAttr {
    /// `<meta name="...">`
    Name,
    /// `<meta property="...">` (Open Graph)
    Property,
}

impl MetaAttr {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
}

/// Inline `<script type="...">` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTag {
    pub kind: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadNode {
    Meta(MetaTag),
    Link(LinkTag),
    Script(ScriptTag),
}

/// Live page metadata: title plus meta, link and script elements.
#[derive(Debug, Clone, Default)]
pub struct DocumentHead {
    title: String,
    /// Current page URL (`location.href`)
    location: String,
    nodes: Vec<HeadNode>,
}

impl DocumentHead {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            location: location.into(),
            nodes: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn nodes(&self) -> &[HeadNode] {
        &self.nodes
    }

    /// Create or update `<meta {attr}="{key}" content="...">`.
    ///
    /// Returns `true` if a new element was created.
    pub fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str) -> bool {
        for node in &mut self.nodes {
            if let HeadNode::Meta(meta) = node
                && meta.attr == attr
                && meta.key == key
            {
                meta.content.clear();
                meta.content.push_str(content);
                return false;
            }
        }

        self.nodes.push(HeadNode::Meta(MetaTag {
            attr,
            key: key.to_string(),
            content: content.to_string(),
        }));
        true
    }

    /// Content of a meta tag, if present.
    pub fn meta(&self, attr: MetaAttr, key: &str) -> Option<&str> {
        self.nodes.iter().find_map(|node| match node {
            HeadNode::Meta(meta) if meta.attr == attr && meta.key == key => {
                Some(meta.content.as_str())
            }
            _ => None,
        })
    }

    /// Create or update `<link rel="{rel}" href="...">`.
    ///
    /// Returns `true` if a new element was created.
    pub fn upsert_link(&mut self, rel: &str, href: &str) -> bool {
        for node in &mut self.nodes {
            if let HeadNode::Link(link) = node
                && link.rel == rel
            {
                link.href.clear();
                link.href.push_str(href);
                return false;
            }
        }

        self.nodes.push(HeadNode::Link(LinkTag {
            rel: rel.to_string(),
            href: href.to_string(),
        }));
        true
    }

    pub fn link(&self, rel: &str) -> Option<&str> {
        self.nodes.iter().find_map(|node| match node {
            HeadNode::Link(link) if link.rel == rel => Some(link.href.as_str()),
            _ => None,
        })
    }

    /// Remove any script of `kind`, then append a new one.
    pub fn replace_script(&mut self, kind: &str, body: impl Into<String>) {
        self.nodes
            .retain(|node| !matches!(node, HeadNode::Script(script) if script.kind == kind));
        self.nodes.push(HeadNode::Script(ScriptTag {
            kind: kind.to_string(),
            body: body.into(),
        }));
    }

    /// Scripts of the given type, in document order.
    pub fn scripts<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a ScriptTag> + 'a {
        self.nodes.iter().filter_map(move |node| match node {
            HeadNode::Script(script) if script.kind == kind => Some(script),
            _ => None,
        })
    }

    /// Number of elements with the given identity (for duplicate checks).
    pub fn count_meta(&self, attr: MetaAttr, key: &str) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, HeadNode::Meta(m) if m.attr == attr && m.key == key))
            .count()
    }

    pub fn count_links(&self, rel: &str) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, HeadNode::Link(l) if l.rel == rel))
            .count()
    }

    /// Serialize as HTML, one element per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.title.is_empty() {
            let _ = writeln!(out, "<title>{}</title>", escape(&self.title));
        }
        for node in &self.nodes {
            match node {
                HeadNode::Meta(meta) => {
                    let _ = writeln!(
                        out,
                        r#"<meta {}="{}" content="{}">"#,
                        meta.attr.as_str(),
                        escape_attr(&meta.key),
                        escape_attr(&meta.content)
                    );
                }
                HeadNode::Link(link) => {
                    let _ = writeln!(
                        out,
                        r#"<link rel="{}" href="{}">"#,
                        escape_attr(&link.rel),
                        escape_attr(&link.href)
                    );
                }
                HeadNode::Script(script) => {
                    // Raw text element: only a closing tag could break out
                    let body = script.body.replace("</", "<\\/");
                    let _ = writeln!(
                        out,
                        r#"<script type="{}">{}</script>"#,
                        escape_attr(&script.kind),
                        body
                    );
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_meta_updates_in_place() {
        let mut head = DocumentHead::new("https://example.dev/");
        assert!(head.upsert_meta(MetaAttr::Name, "description", "first"));
        assert!(head.upsert_meta(MetaAttr::Property, "og:title", "Title"));
        assert!(!head.upsert_meta(MetaAttr::Name, "description", "second"));

        assert_eq!(head.meta(MetaAttr::Name, "description"), Some("second"));
        assert_eq!(head.count_meta(MetaAttr::Name, "description"), 1);
        // Position is preserved
        assert!(matches!(&head.nodes()[0], HeadNode::Meta(m) if m.key == "description"));
    }

    #[test]
    fn test_name_and_property_are_distinct_keys() {
        let mut head = DocumentHead::default();
        head.upsert_meta(MetaAttr::Name, "og:title", "by name");
        head.upsert_meta(MetaAttr::Property, "og:title", "by property");
        assert_eq!(head.nodes().len(), 2);
        assert_eq!(head.meta(MetaAttr::Property, "og:title"), Some("by property"));
    }

    #[test]
    fn test_upsert_link() {
        let mut head = DocumentHead::default();
        assert!(head.upsert_link("canonical", "https://example.dev/#home"));
        assert!(!head.upsert_link("canonical", "https://example.dev/#projects"));
        assert_eq!(head.link("canonical"), Some("https://example.dev/#projects"));
        assert_eq!(head.count_links("canonical"), 1);
    }

    #[test]
    fn test_replace_script_never_accumulates() {
        let mut head = DocumentHead::default();
        head.replace_script("application/ld+json", "{\"a\":1}");
        head.upsert_meta(MetaAttr::Name, "keywords", "k");
        head.replace_script("application/ld+json", "{\"a\":2}");

        let scripts: Vec<_> = head.scripts("application/ld+json").collect();
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].body, "{\"a\":2}");
        // Replacement is appended after existing elements
        assert!(matches!(head.nodes().last(), Some(HeadNode::Script(_))));
    }

    #[test]
    fn test_render_escapes_attributes() {
        let mut head = DocumentHead::default();
        head.set_title("Tom & Jerry");
        head.upsert_meta(MetaAttr::Name, "description", "say \"hi\" <now>");
        head.upsert_link("canonical", "https://example.dev/?a=1&b=2");

        let html = head.render();
        assert!(html.contains("<title>Tom &amp; Jerry</title>"));
        assert!(html.contains(
            r#"<meta name="description" content="say &quot;hi&quot; &lt;now&gt;">"#
        ));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.dev/?a=1&amp;b=2">"#));
    }

    #[test]
    fn test_render_script_cannot_close_early() {
        let mut head = DocumentHead::default();
        head.replace_script("application/ld+json", r#"{"x":"</script><b>"}"#);
        let html = head.render();
        assert_eq!(html.matches("</script>").count(), 1);
    }
}
