// Fixed runtime settings
// Resolved once at startup; no config file, environment variables, or CLI flags are read.

use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Listening port, all interfaces.
pub const PORT: u16 = 8080;

/// Index file names tried, in order, when a directory is requested.
pub const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Runtime settings shared read-only across connection tasks.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the listener binds to.
    pub addr: SocketAddr,
    /// Canonicalized serving root; every resolved path must stay inside it.
    pub root: PathBuf,
}

impl Config {
    /// Resolve settings against the process environment: the serving root
    /// is the current working directory at startup.
    pub fn resolve() -> io::Result<Self> {
        Self::with_root(std::env::current_dir()?)
    }

    /// Build settings for an explicit root directory.
    pub fn with_root(root: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT)),
            root: root.as_ref().canonicalize()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_cwd_as_root() {
        let config = Config::resolve().expect("cwd should resolve");
        assert!(config.root.is_absolute());
        assert_eq!(config.addr.port(), PORT);
    }

    #[test]
    fn missing_root_is_an_error() {
        assert!(Config::with_root("/nonexistent/pureserve-root").is_err());
    }
}
