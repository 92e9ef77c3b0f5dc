//! Static file serving.
//!
//! Resolves a sanitized request path against the serving root and turns
//! what it finds there into a response: file bytes, an index file, a
//! directory listing, a redirect, or an error status.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::{Config, INDEX_FILES};
use crate::handler::listing::{self, DirEntry};
use crate::handler::request::RequestContext;
use crate::http;
use crate::logger;

/// Serve the filesystem resource the request path points at.
pub async fn serve(ctx: &RequestContext<'_>, config: &Config) -> Response<Full<Bytes>> {
    let fs_path = config.root.join(ctx.path.to_relative());

    let metadata = match fs::metadata(&fs_path).await {
        Ok(m) => m,
        Err(e) => return io_error_response(&fs_path, &e),
    };

    if metadata.is_dir() {
        // Directories are only served under their slash-terminated form,
        // so relative links inside them resolve correctly.
        if !ctx.path.has_trailing_slash() {
            return http::build_redirect_response(&directory_redirect(ctx));
        }
        serve_directory(&fs_path, ctx, config).await
    } else if metadata.is_file() {
        // A slash-terminated path names a directory; a file there is a miss.
        if ctx.path.has_trailing_slash() {
            return http::build_404_response();
        }
        serve_file(&fs_path, &config.root).await
    } else {
        // Sockets, fifos, devices: not served.
        http::build_404_response()
    }
}

/// Location for a directory requested without its trailing slash; the
/// original (still-encoded) path is reused and the query preserved.
/// Leading slashes collapse to one so the Location can never be read as
/// a protocol-relative URL.
fn directory_redirect(ctx: &RequestContext<'_>) -> String {
    let path = ctx.raw_path.trim_start_matches('/');
    let query = ctx.query.map(|q| format!("?{q}")).unwrap_or_default();
    format!("/{path}/{query}")
}

async fn serve_directory(
    dir: &Path,
    ctx: &RequestContext<'_>,
    config: &Config,
) -> Response<Full<Bytes>> {
    let dir = match checked_canonical(dir, &config.root).await {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    for index in INDEX_FILES {
        let candidate = dir.join(index);
        match fs::metadata(&candidate).await {
            Ok(m) if m.is_file() => return serve_file(&candidate, &config.root).await,
            _ => {}
        }
    }

    list_directory(&dir, ctx).await
}

async fn serve_file(fs_path: &Path, root: &Path) -> Response<Full<Bytes>> {
    let canonical = match checked_canonical(fs_path, root).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match fs::read(&canonical).await {
        Ok(content) => {
            // Content type follows the requested name, not the symlink target.
            let content_type = http::mime::content_type_for(fs_path);
            http::build_file_response(Bytes::from(content), content_type)
        }
        Err(e) => io_error_response(fs_path, &e),
    }
}

async fn list_directory(dir: &Path, ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let mut reader = match fs::read_dir(dir).await {
        Ok(r) => r,
        Err(e) => return io_error_response(dir, &e),
    };

    let mut entries = Vec::new();
    loop {
        match reader.next_entry().await {
            Ok(Some(entry)) => {
                let is_dir = entry.file_type().await.is_ok_and(|t| t.is_dir());
                entries.push(DirEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    is_dir,
                });
            }
            Ok(None) => break,
            Err(e) => return io_error_response(dir, &e),
        }
    }

    http::build_html_response(listing::render(&ctx.path.display(), entries))
}

/// Canonicalize a path and require it to stay inside the root. The
/// sanitizer already blocks lexical traversal; this catches symlinks
/// whose target lies outside the served tree.
async fn checked_canonical(
    fs_path: &Path,
    root: &Path,
) -> Result<PathBuf, Response<Full<Bytes>>> {
    match fs::canonicalize(fs_path).await {
        Ok(p) if p.starts_with(root) => Ok(p),
        Ok(p) => {
            logger::log_warning(&format!("Refusing path outside root: {}", p.display()));
            Err(http::build_403_response())
        }
        Err(e) => Err(io_error_response(fs_path, &e)),
    }
}

fn io_error_response(path: &Path, err: &io::Error) -> Response<Full<Bytes>> {
    match err.kind() {
        io::ErrorKind::NotFound => http::build_404_response(),
        io::ErrorKind::PermissionDenied => {
            logger::log_warning(&format!("Permission denied: {}", path.display()));
            http::build_403_response()
        }
        _ => {
            logger::log_error(&format!("Failed to read '{}': {err}", path.display()));
            http::build_500_response()
        }
    }
}
