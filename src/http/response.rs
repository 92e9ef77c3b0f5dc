//! HTTP response builders.
//!
//! One builder per status the server can emit, decoupled from the
//! filesystem logic that decides which one applies.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::logger;

/// Value of the `Server` header on every response.
pub const SERVER_NAME: &str = "pureserve/0.1";

fn log_build_error(status: &str, err: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {err}"));
}

/// 200 with file bytes and an inferred content type.
pub fn build_file_response(data: Bytes, content_type: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Server", SERVER_NAME)
        .header("Content-Type", content_type)
        .header("Content-Length", data.len())
        .body(Full::new(data))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// 200 with generated HTML, used for directory listings.
pub fn build_html_response(content: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Server", SERVER_NAME)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content.len())
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// 301 to a directory path with its trailing slash appended.
pub fn build_redirect_response(location: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(301)
        .header("Server", SERVER_NAME)
        .header("Location", location)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from("301 Moved Permanently")))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// 400 for requests whose path cannot be decoded.
pub fn build_400_response() -> Response<Full<Bytes>> {
    build_plain_error(400, "400 Bad Request")
}

/// 403 for traversal attempts and unreadable resources.
pub fn build_403_response() -> Response<Full<Bytes>> {
    build_plain_error(403, "403 Forbidden")
}

/// 404 for paths that resolve to nothing.
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_plain_error(404, "404 Not Found")
}

/// 405 for anything other than GET and HEAD.
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Server", SERVER_NAME)
        .header("Allow", "GET, HEAD")
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// 500 for filesystem failures that are neither missing nor forbidden.
pub fn build_500_response() -> Response<Full<Bytes>> {
    build_plain_error(500, "500 Internal Server Error")
}

fn build_plain_error(status: u16, body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Server", SERVER_NAME)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error(body, &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_response_headers() {
        let resp = build_file_response(Bytes::from_static(b"hello"), "text/plain; charset=utf-8");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "5");
        assert_eq!(resp.headers()["Content-Type"], "text/plain; charset=utf-8");
        assert_eq!(resp.headers()["Server"], SERVER_NAME);
    }

    #[test]
    fn redirect_carries_location() {
        let resp = build_redirect_response("/sub/");
        assert_eq!(resp.status(), 301);
        assert_eq!(resp.headers()["Location"], "/sub/");
    }

    #[test]
    fn method_not_allowed_advertises_allow() {
        let resp = build_405_response();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD");
    }

    #[test]
    fn error_statuses() {
        assert_eq!(build_400_response().status(), 400);
        assert_eq!(build_403_response().status(), 403);
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(build_500_response().status(), 500);
    }
}
