//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants and lookup misses to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Codes are stable; scripts may branch on them.

use appcfg::ConfigError;
use thiserror::Error;

/// Structured exit codes for appcfg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Source unavailable - missing file, bad URL, or network failure.
    ///
    /// Scripts may retry when the source is remote.
    SourceUnavailable = 3,

    /// A requested record, flag, or field does not exist.
    NotFound = 4,

    /// The source was reached but is empty or not a valid document.
    ///
    /// Scripts should fix the document and not retry.
    BadDocument = 5,

    /// Save was requested for a document loaded over HTTP.
    NotLocal = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::ReadSource { .. }
            | ConfigError::InvalidUrl { .. }
            | ConfigError::FetchRemote { .. } => ExitCode::SourceUnavailable,
            ConfigError::EmptySource { .. } | ConfigError::MalformedDocument { .. } => {
                ExitCode::BadDocument
            }
            ConfigError::NotLocalOrigin { .. } => ExitCode::NotLocal,
            ConfigError::WriteFile { .. }
            | ConfigError::Serialize(_)
            | ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// A lookup that found nothing.
#[derive(Debug, Error)]
#[error("{kind} not found: {key}")]
pub struct NotFound {
    pub kind: &'static str,
    pub key: String,
}

impl NotFound {
    pub fn new(kind: &'static str, key: &str) -> Self {
        Self {
            kind,
            key: key.to_string(),
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if nothing in the chain is recognized.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.downcast_ref::<NotFound>().is_some() {
                return ExitCode::NotFound;
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::SourceUnavailable.as_i32(), 3);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
        assert_eq!(ExitCode::BadDocument.as_i32(), 5);
        assert_eq!(ExitCode::NotLocal.as_i32(), 6);
    }

    #[test]
    fn test_from_config_error_read_source() {
        let err = ConfigError::ReadSource {
            path: "missing.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::SourceUnavailable);
    }

    #[test]
    fn test_from_config_error_empty_source() {
        let err = ConfigError::EmptySource {
            origin: "empty.json".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::BadDocument);
    }

    #[test]
    fn test_from_config_error_not_local() {
        let err = ConfigError::NotLocalOrigin {
            origin: "https://example.com/c.json".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::NotLocal);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err: anyhow::Error = Err::<(), _>(ConfigError::EmptySource {
            origin: "empty.json".to_string(),
        })
        .context("Failed to load configuration")
        .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::BadDocument);
    }

    #[test]
    fn test_not_found_exit_code() {
        let err = anyhow::Error::new(NotFound::new("Database", "main"));
        assert_eq!(err.exit_code(), ExitCode::NotFound);
        assert_eq!(err.to_string(), "Database not found: main");
    }

    #[test]
    fn test_unrecognized_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
