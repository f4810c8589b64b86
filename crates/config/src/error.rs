//! Error types for configuration loading and persistence.
//!
//! Responsibilities:
//! - Define error variants for fetch, parse, save, and dotenv failures.
//! - Group transport failures so callers can branch on "source unavailable".
//!
//! Does NOT handle:
//! - "Not found" lookups. Accessors return `Option` or an empty `Vec`.
//! - Logging. Errors are returned to the caller and never logged here.
//!
//! Invariants:
//! - Every variant carries the origin or path it relates to.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, saving, or reloading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The local source file is missing or unreadable.
    #[error("Failed to read configuration source at {path}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The remote origin is not a valid URL.
    #[error("Invalid configuration URL: {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The remote source could not be fetched at the transport level.
    #[error("Failed to fetch configuration from {url}")]
    FetchRemote {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The source was reachable but returned zero bytes.
    #[error("No data from source for configuration: {origin}")]
    EmptySource { origin: String },

    /// The source bytes are not a JSON object matching the document schema.
    #[error("Failed to parse configuration from {origin}")]
    MalformedDocument {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Save was attempted on a document that was fetched over HTTP.
    #[error("Configuration file is not local: {origin}")]
    NotLocalOrigin { origin: String },

    #[error("Failed to write configuration file at {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize configuration")]
    Serialize(#[source] serde_json::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Returns true when the source could not be read or fetched at all.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(
            self,
            ConfigError::ReadSource { .. }
                | ConfigError::InvalidUrl { .. }
                | ConfigError::FetchRemote { .. }
        )
    }

    /// Returns true when the source was reached but its content is unusable.
    pub fn is_bad_document(&self) -> bool {
        matches!(
            self,
            ConfigError::EmptySource { .. } | ConfigError::MalformedDocument { .. }
        )
    }
}
