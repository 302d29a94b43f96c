//! Content-type lookup by file extension.
//!
//! A fixed table; anything it does not know falls back to the `html`
//! entry's type. Lookup is case-sensitive.

const CONTENT_TYPES: &[(&str, &str)] = &[
    ("htm", "text/html"),
    ("html", "text/html"),
    ("txt", "text/plain"),
    ("gif", "image/gif"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
];

pub const FALLBACK_EXTENSION: &str = "html";

pub fn lookup(extension: &str) -> Option<&'static str> {
    CONTENT_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

/// Resolves an extension to a MIME type, falling back to `text/html`.
pub fn content_type_for(extension: &str) -> &'static str {
    lookup(extension)
        .or_else(|| lookup(FALLBACK_EXTENSION))
        .unwrap_or("text/html")
}
