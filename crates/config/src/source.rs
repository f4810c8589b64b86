//! Configuration sources.
//!
//! Responsibilities:
//! - Classify an origin string as a local path or an HTTP(S) URL.
//! - Read the full contents of the origin in one blocking call.
//!
//! Does NOT handle:
//! - Parsing the bytes (see `loader.rs`).
//! - Retries, caching, timeouts, or status-code checks. Callers needing those
//!   wrap the fetch themselves.
//!
//! Invariants:
//! - Locality is decided by a case-sensitive `http://` / `https://` prefix only.
//! - A fetch that succeeds with zero bytes is an `EmptySource` error.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::constants::REMOTE_PREFIXES;
use crate::error::ConfigError;

/// Where a configuration document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file on the local filesystem. Documents from here can be saved.
    Local(PathBuf),
    /// An HTTP(S) URL. Documents from here are read-only.
    Remote(String),
}

impl Source {
    /// Classifies `origin` by its scheme prefix.
    pub fn parse(origin: &str) -> Self {
        if REMOTE_PREFIXES
            .iter()
            .any(|prefix| origin.starts_with(prefix))
        {
            Source::Remote(origin.to_string())
        } else {
            Source::Local(PathBuf::from(origin))
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Source::Local(_))
    }

    /// Reads the whole document.
    ///
    /// # Errors
    /// Returns `ReadSource`, `InvalidUrl` or `FetchRemote` when the origin is
    /// unavailable and `EmptySource` when it yields no bytes.
    pub fn fetch(&self) -> Result<Vec<u8>, ConfigError> {
        let bytes = match self {
            Source::Local(path) => read_local(path)?,
            Source::Remote(url) => fetch_remote(url)?,
        };

        if bytes.is_empty() {
            return Err(ConfigError::EmptySource {
                origin: self.to_string(),
            });
        }
        Ok(bytes)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Local(path) => write!(f, "{}", path.display()),
            Source::Remote(url) => f.write_str(url),
        }
    }
}

fn read_local(path: &Path) -> Result<Vec<u8>, ConfigError> {
    std::fs::read(path).map_err(|source| ConfigError::ReadSource {
        path: path.to_path_buf(),
        source,
    })
}

fn fetch_remote(url: &str) -> Result<Vec<u8>, ConfigError> {
    let parsed = Url::parse(url).map_err(|source| ConfigError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    let request_failed = |source| ConfigError::FetchRemote {
        url: url.to_string(),
        source,
    };

    // The body is used whatever the status; no timeout is applied.
    let client = reqwest::blocking::Client::builder()
        .timeout(None)
        .build()
        .map_err(request_failed)?;
    let response = client.get(parsed).send().map_err(request_failed)?;
    let status = response.status();
    let body = response.bytes().map_err(request_failed)?;

    tracing::debug!(
        url = %url,
        status = %status,
        bytes = body.len(),
        "Fetched remote configuration"
    );

    Ok(body.to_vec())
}
