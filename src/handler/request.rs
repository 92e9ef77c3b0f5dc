//! Request entry point.
//!
//! Validates the method, decodes and sanitizes the path, dispatches to
//! static file serving, and emits one access-log line per request.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{header, Method, Request, Response, Uri, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Config;
use crate::handler::static_files;
use crate::http::{self, PathError, RequestPath};
use crate::logger::{self, AccessLogEntry};

/// Per-request state handed down to the filesystem layer.
pub struct RequestContext<'a> {
    /// Original (still percent-encoded) URL path, reused for redirects.
    pub raw_path: &'a str,
    pub query: Option<&'a str>,
    pub path: RequestPath,
}

/// Handle one request end to end. Generic over the body type: the server
/// never reads request bodies, and tests drive this with empty ones.
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let is_head = method == Method::HEAD;

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        method.to_string(),
        uri.path().to_owned(),
    );
    entry.query = uri.query().map(ToOwned::to_owned);
    entry.http_version = version_label(req.version()).to_owned();

    let mut response = dispatch(&method, &uri, &config).await;

    // HEAD mirrors GET: identical status and headers, empty body.
    if is_head {
        *response.body_mut() = Full::new(Bytes::new());
    }

    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    logger::log_access(&entry);

    Ok(response)
}

async fn dispatch(method: &Method, uri: &Uri, config: &Config) -> Response<Full<Bytes>> {
    if !matches!(*method, Method::GET | Method::HEAD) {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return http::build_405_response();
    }

    let path = match RequestPath::parse(uri.path()) {
        Ok(p) => p,
        Err(PathError::Malformed) => {
            logger::log_warning(&format!("Malformed request path: {}", uri.path()));
            return http::build_400_response();
        }
        Err(PathError::Traversal) => {
            logger::log_warning(&format!("Path traversal attempt blocked: {}", uri.path()));
            return http::build_403_response();
        }
    };

    let ctx = RequestContext {
        raw_path: uri.path(),
        query: uri.query(),
        path,
    };
    static_files::serve(&ctx, config).await
}

fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}
