//! Request path decoding and sanitization.
//!
//! Percent-decodes the URL path and splits it into filesystem-safe
//! segments before anything touches the disk.

use percent_encoding::percent_decode_str;
use std::path::PathBuf;

/// Why a request path cannot be mapped onto the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// Percent-escapes did not decode to UTF-8, or the path carries a NUL byte.
    Malformed,
    /// A `..` segment would climb above the serving root.
    Traversal,
}

/// A decoded request path, reduced to the segments that remain after
/// dropping empty and `.` segments and resolving `..` against its
/// preceding segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPath {
    segments: Vec<String>,
    trailing_slash: bool,
}

impl RequestPath {
    /// Parse the raw (still percent-encoded) path of a request URI.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let decoded = percent_decode_str(raw)
            .decode_utf8()
            .map_err(|_| PathError::Malformed)?;
        if decoded.contains('\0') {
            return Err(PathError::Malformed);
        }

        let mut segments: Vec<String> = Vec::new();
        for segment in decoded.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    // Climbing above the root is refused outright rather
                    // than silently clamped.
                    if segments.pop().is_none() {
                        return Err(PathError::Traversal);
                    }
                }
                name => segments.push(name.to_owned()),
            }
        }

        Ok(Self {
            trailing_slash: segments.is_empty() || decoded.ends_with('/'),
            segments,
        })
    }

    /// Whether the request addressed the serving root itself.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the URL path ended in `/` (directories are only served
    /// directly in that form).
    pub const fn has_trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Relative filesystem path under the serving root.
    pub fn to_relative(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Decoded display form, always `/`-prefixed, used in listing pages.
    pub fn display(&self) -> String {
        if self.segments.is_empty() {
            "/".to_owned()
        } else {
            format!("/{}/", self.segments.join("/"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path() {
        let path = RequestPath::parse("/").unwrap();
        assert!(path.is_root());
        assert!(path.has_trailing_slash());
        assert_eq!(path.display(), "/");
    }

    #[test]
    fn plain_file_path() {
        let path = RequestPath::parse("/sub/a.txt").unwrap();
        assert_eq!(path.segments(), ["sub", "a.txt"]);
        assert!(!path.has_trailing_slash());
    }

    #[test]
    fn trailing_slash_is_preserved() {
        assert!(RequestPath::parse("/sub/").unwrap().has_trailing_slash());
        assert!(!RequestPath::parse("/sub").unwrap().has_trailing_slash());
    }

    #[test]
    fn percent_decoding() {
        let path = RequestPath::parse("/with%20space/f%C3%BCr.txt").unwrap();
        assert_eq!(path.segments(), ["with space", "für.txt"]);
    }

    #[test]
    fn dot_segments_are_dropped() {
        let path = RequestPath::parse("/./sub/./a.txt").unwrap();
        assert_eq!(path.segments(), ["sub", "a.txt"]);
    }

    #[test]
    fn parent_segments_resolve_inside_the_root() {
        let path = RequestPath::parse("/sub/../other/a.txt").unwrap();
        assert_eq!(path.segments(), ["other", "a.txt"]);
    }

    #[test]
    fn traversal_above_the_root_is_refused() {
        assert_eq!(RequestPath::parse("/.."), Err(PathError::Traversal));
        assert_eq!(
            RequestPath::parse("/../etc/passwd"),
            Err(PathError::Traversal)
        );
        assert_eq!(
            RequestPath::parse("/sub/../../etc/passwd"),
            Err(PathError::Traversal)
        );
    }

    #[test]
    fn encoded_traversal_is_refused_too() {
        assert_eq!(
            RequestPath::parse("/%2e%2e/secret"),
            Err(PathError::Traversal)
        );
    }

    #[test]
    fn collapsed_parent_leaves_the_root_directory() {
        let path = RequestPath::parse("/sub/..").unwrap();
        assert!(path.is_root());
        assert!(path.has_trailing_slash());
    }

    #[test]
    fn invalid_escapes_are_malformed() {
        assert_eq!(RequestPath::parse("/%ff%fe"), Err(PathError::Malformed));
        assert_eq!(RequestPath::parse("/nul%00byte"), Err(PathError::Malformed));
    }
}
