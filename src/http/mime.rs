//! MIME type detection based on file extensions.

use std::path::Path;

/// Content type used when the extension is unknown.
pub const OCTET_STREAM: &str = "application/octet-stream";

const COMPRESSIBLE_PREFIXES: [&str; 4] = [
    "text/",
    "application/javascript",
    "application/json",
    "application/xml",
];

/// Guesses the content type of a file from its extension.
///
/// # Example
///
/// ```
/// # use staticd::http::mime::content_type_for;
/// assert_eq!(content_type_for("index.html"), "text/html");
/// assert_eq!(content_type_for("blob"), "application/octet-stream");
/// ```
pub fn content_type_for(path: impl AsRef<Path>) -> String {
    mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| OCTET_STREAM.to_string())
}

/// Whether a body of this content type is sent gzip-compressed.
pub fn is_compressible(content_type: &str) -> bool {
    COMPRESSIBLE_PREFIXES
        .iter()
        .any(|prefix| content_type.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_structured_types_compress() {
        assert!(is_compressible("text/html"));
        assert!(is_compressible("text/css"));
        assert!(is_compressible("application/json"));
        assert!(is_compressible("application/xml"));
        assert!(is_compressible("application/javascript"));
    }

    #[test]
    fn binary_types_do_not_compress() {
        assert!(!is_compressible("image/png"));
        assert!(!is_compressible(OCTET_STREAM));
        assert!(!is_compressible("application/pdf"));
    }

    #[test]
    fn known_extensions() {
        assert_eq!(content_type_for("a/b/style.css"), "text/css");
        assert_eq!(content_type_for("data.json"), "application/json");
        assert_eq!(content_type_for("logo.png"), "image/png");
    }
}
