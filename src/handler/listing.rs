//! Directory listing rendering.
//!
//! Builds the HTML page returned for a directory that has no index file:
//! one hyperlink per child entry, sorted by name.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped when an entry name becomes an href. `%` must be in
/// the set so already-encoded-looking names round-trip.
const HREF_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'&')
    .add(b'\'')
    .add(b'%')
    .add(b'/');

/// One child of the listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Render the listing page for `dir_path` (the decoded, `/`-terminated
/// URL path being listed). Entries are sorted by name; directories get a
/// trailing `/` in both the link target and the label.
pub fn render(dir_path: &str, mut entries: Vec<DirEntry>) -> String {
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let title = escape_html(dir_path);
    let mut page = String::with_capacity(256 + entries.len() * 64);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>Directory listing for {title}</title>\n"));
    page.push_str("</head>\n<body>\n");
    page.push_str(&format!("<h1>Directory listing for {title}</h1>\n"));
    page.push_str("<hr>\n<ul>\n");

    for entry in &entries {
        let suffix = if entry.is_dir { "/" } else { "" };
        let href = utf8_percent_encode(&entry.name, HREF_ENCODE).to_string();
        let label = escape_html(&entry.name);
        page.push_str(&format!(
            "<li><a href=\"{href}{suffix}\">{label}{suffix}</a></li>\n"
        ));
    }

    page.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    page
}

/// Escape text for inclusion in HTML content or attribute values.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
