//! Section identifiers and measured geometry.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Sections of the default single-page layout, in document order.
pub const DEFAULT_SECTIONS: [&str; 5] = ["home", "about", "resume", "projects", "contact"];

/// Identifier of a logical page region (`home`, `about`, ...).
///
/// Matches the `id` attribute of the rendered section element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ids of [`DEFAULT_SECTIONS`].
    pub fn defaults() -> Vec<Self> {
        DEFAULT_SECTIONS.iter().copied().map(Self::from).collect()
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Document-space vertical extent of a rendered section, `[top, bottom)`.
///
/// Ephemeral: measured from the rendering layer on every scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    pub top: f64,
    pub bottom: f64,
}

impl SectionGeometry {
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Build from a viewport-relative bounding rect, the way a browser reports it.
    ///
    /// `rect_top` is relative to the viewport, so the current scroll offset is
    /// added back to get the document offset.
    pub fn from_rect(rect_top: f64, scroll_y: f64, offset_height: f64) -> Self {
        let top = rect_top + scroll_y;
        Self {
            top,
            bottom: top + offset_height,
        }
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Scroll state of the host window at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Vertical scroll offset (`window.scrollY`).
    pub scroll_y: f64,
    /// Viewport height (`window.innerHeight`).
    pub height: f64,
}

impl Viewport {
    pub const fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_from_rect_adds_scroll() {
        // Element 200px below the top of a viewport scrolled to 600
        let geometry = SectionGeometry::from_rect(200.0, 600.0, 800.0);
        assert_eq!(geometry, SectionGeometry::new(800.0, 1600.0));
        assert_eq!(geometry.height(), 800.0);
    }

    #[test]
    fn test_section_id_compares_with_str() {
        let id = SectionId::from("about");
        assert_eq!(id, "about");
        assert_eq!(id.to_string(), "about");
    }

    #[test]
    fn test_section_id_serde_transparent() {
        let id: SectionId = serde_json::from_str("\"resume\"").unwrap();
        assert_eq!(id.as_str(), "resume");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"resume\"");
    }

    #[test]
    fn test_default_sections_order() {
        let ids = SectionId::defaults();
        assert_eq!(ids.first().map(SectionId::as_str), Some("home"));
        assert_eq!(ids.last().map(SectionId::as_str), Some("contact"));
        assert_eq!(ids.len(), 5);
    }
}
