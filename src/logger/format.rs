//! Access log formatting.
//!
//! One line per completed request in Common Log Format:
//! `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`

use chrono::Local;

/// Everything an access-log line needs, gathered across the life of a
/// request.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: chrono::DateTime<Local>,
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub http_version: String,
    pub status: u16,
    pub body_bytes: usize,
}

impl AccessLogEntry {
    /// Start an entry for an incoming request; status and body size are
    /// filled in once the response exists.
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_owned(),
            status: 200,
            body_bytes: 0,
        }
    }

    /// Render as a Common Log Format line.
    pub fn to_common_log(&self) -> String {
        format!(
            "{} - - [{}] \"{} {}{} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.query
                .as_ref()
                .map(|q| format!("?{q}"))
                .unwrap_or_default(),
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_log_line_shape() {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1".to_owned(),
            "GET".to_owned(),
            "/sub/a.txt".to_owned(),
        );
        entry.status = 200;
        entry.body_bytes = 42;

        let line = entry.to_common_log();
        assert!(line.starts_with("127.0.0.1 - - ["));
        assert!(line.contains("\"GET /sub/a.txt HTTP/1.1\""));
        assert!(line.ends_with(" 200 42"));
    }

    #[test]
    fn query_string_is_included_in_the_request_line() {
        let mut entry =
            AccessLogEntry::new("10.0.0.2".to_owned(), "GET".to_owned(), "/sub".to_owned());
        entry.query = Some("page=2".to_owned());
        entry.status = 301;

        let line = entry.to_common_log();
        assert!(line.contains("\"GET /sub?page=2 HTTP/1.1\" 301"));
    }
}
