//! Content-Type inference from file extensions.

use std::path::Path;

/// Look up the Content-Type for a filesystem path by its extension.
pub fn content_type_for(path: &Path) -> &'static str {
    from_extension(path.extension().and_then(|e| e.to_str()))
}

/// Map a file extension to a Content-Type; unknown or missing
/// extensions fall back to the generic binary type.
///
/// # Examples
/// ```
/// use pureserve::http::mime::from_extension;
/// assert_eq!(from_extension(Some("html")), "text/html; charset=utf-8");
/// assert_eq!(from_extension(None), "application/octet-stream");
/// ```
pub fn from_extension(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("txt" | "log") => "text/plain; charset=utf-8",
        Some("md" | "markdown") => "text/markdown; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("csv") => "text/csv; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("wasm") => "application/wasm",
        Some("pdf") => "application/pdf",

        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",

        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",

        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        Some("zip") => "application/zip",
        Some("gz") => "application/gzip",
        Some("tar") => "application/x-tar",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_types_carry_charset() {
        assert_eq!(from_extension(Some("html")), "text/html; charset=utf-8");
        assert_eq!(from_extension(Some("txt")), "text/plain; charset=utf-8");
        assert_eq!(from_extension(Some("css")), "text/css; charset=utf-8");
    }

    #[test]
    fn binary_types() {
        assert_eq!(from_extension(Some("png")), "image/png");
        assert_eq!(from_extension(Some("pdf")), "application/pdf");
        assert_eq!(from_extension(Some("zip")), "application/zip");
    }

    #[test]
    fn unknown_falls_back_to_octet_stream() {
        assert_eq!(from_extension(Some("xyz")), "application/octet-stream");
        assert_eq!(from_extension(None), "application/octet-stream");
    }

    #[test]
    fn lookup_by_path() {
        assert_eq!(
            content_type_for(Path::new("/srv/www/index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            content_type_for(Path::new("README")),
            "application/octet-stream"
        );
    }
}
