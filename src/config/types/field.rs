//! Type-safe config field path.

use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "spy")]
/// pub struct SpyConfig {
///     pub threshold: f64,
/// }
///
/// // Usage:
/// diag.error(SpyConfig::FIELDS.threshold, "must be within [0, 1]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Path built at runtime, e.g. `seo.sections.about.canonical_url`.
    ///
    /// Leaks the string; only used while reporting config errors.
    pub fn dynamic(path: String) -> Self {
        Self(Box::leak(path.into_boxed_str()))
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(f, "{}", quoted.if_supports_color(Stream::Stderr, |t| t.bright_blue()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
