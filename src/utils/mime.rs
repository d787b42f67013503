//! Content types for files under `serve.root`.
//!
//! A portfolio build is HTML, stylesheets, scripts, images, fonts and the
//! occasional resume PDF, so the table stays small.

use std::path::Path;

/// Content types the server writes itself.
pub mod types {
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const JSON: &str = "application/json";
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Extension groups and their content type.
const TABLE: &[(&[&str], &str)] = &[
    (&["html", "htm"], types::HTML),
    (&["txt"], types::PLAIN),
    (&["css"], "text/css; charset=utf-8"),
    (&["js", "mjs"], "text/javascript; charset=utf-8"),
    (&["json", "webmanifest", "map"], types::JSON),
    (&["xml"], "application/xml"),
    (&["pdf"], "application/pdf"),
    (&["svg"], "image/svg+xml"),
    (&["png"], "image/png"),
    (&["jpg", "jpeg"], "image/jpeg"),
    (&["gif"], "image/gif"),
    (&["webp"], "image/webp"),
    (&["avif"], "image/avif"),
    (&["ico"], "image/x-icon"),
    (&["mp4", "m4v"], "video/mp4"),
    (&["webm"], "video/webm"),
    (&["woff"], "font/woff"),
    (&["woff2"], "font/woff2"),
    (&["ttf"], "font/ttf"),
    (&["otf"], "font/otf"),
];

/// Content type for `path`, matched case-insensitively on the extension.
pub fn from_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(types::OCTET_STREAM, from_extension)
}

/// Content type for a bare extension, `application/octet-stream` if unknown.
pub fn from_extension(ext: &str) -> &'static str {
    TABLE
        .iter()
        .find(|(exts, _)| exts.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .map_or(types::OCTET_STREAM, |(_, mime)| mime)
}
