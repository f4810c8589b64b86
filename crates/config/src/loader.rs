//! Configuration loader.
//!
//! Responsibilities:
//! - Fetch a document from a local path or URL and parse it.
//! - Apply default-fill, then capture and interpolate every `${VAR}` field.
//! - Provide a builder-pattern `ConfigLoader` for injecting the environment.
//! - Enforce the `DOTENV_DISABLED` gate before loading a `.env` file.
//!
//! Does NOT handle:
//! - Writing documents back (see `persistence.rs`).
//! - Logging errors. They are returned to the caller.
//!
//! Invariants / Assumptions:
//! - Default-fill runs before interpolation, so filled values are interpolated too.
//! - A failed load never yields a partial document.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use crate::defaults::apply_defaults;
use crate::env::{EnvHandle, EnvSource};
use crate::error::ConfigError;
use crate::raw::{capture, capture_all, restore, restore_all};
use crate::source::Source;
use crate::types::Configuration;

/// Builder that loads a [`Configuration`] from a source.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    source: Source,
    env: EnvHandle,
}

impl ConfigLoader {
    /// Creates a loader for `origin`, a local path or an `http(s)://` URL.
    pub fn new(origin: &str) -> Self {
        Self::from_source(Source::parse(origin))
    }

    pub fn from_source(source: Source) -> Self {
        Self {
            source,
            env: EnvHandle::process(),
        }
    }

    /// Interpolates against `env` instead of the process environment.
    ///
    /// The handle is kept on the loaded document and reused by save and reload.
    pub fn with_env(self, env: impl EnvSource + Send + Sync + 'static) -> Self {
        self.with_env_handle(EnvHandle::new(env))
    }

    pub fn with_env_handle(mut self, env: EnvHandle) -> Self {
        self.env = env;
        self
    }

    /// Loads a `.env` file first; see [`load_dotenv`].
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        load_dotenv()?;
        Ok(self)
    }

    /// Fetches, parses, defaults and interpolates the document.
    ///
    /// # Errors
    /// Returns a source error when the origin cannot be read, `EmptySource` for
    /// zero bytes, and `MalformedDocument` when the bytes are not a valid document.
    pub fn load(self) -> Result<Configuration, ConfigError> {
        let bytes = self.source.fetch()?;
        let origin = self.source.to_string();

        let mut config: Configuration =
            serde_json::from_slice(&bytes).map_err(|source| ConfigError::MalformedDocument {
                origin: origin.clone(),
                source,
            })?;

        apply_defaults(&mut config);
        interpolate_sections(&mut config, &self.env);

        config.local = self.source.is_local();
        config.file_name = origin;
        config.env = self.env;

        tracing::debug!(
            origin = %config.file_name,
            local = config.local,
            databases = section_len(&config.databases),
            endpoints = section_len(&config.api_endpoints),
            notifications = section_len(&config.notifications),
            "Configuration loaded"
        );

        Ok(config)
    }
}

impl Configuration {
    /// Loads `origin` using the process environment.
    ///
    /// Shorthand for `ConfigLoader::new(origin).load()`.
    pub fn load(origin: &str) -> Result<Self, ConfigError> {
        ConfigLoader::new(origin).load()
    }
}

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from a `.env` file if present.
///
/// If `DOTENV_DISABLED` is set to "true" or "1", the file is not loaded.
///
/// # Errors
///
/// Returns `ConfigError::DotenvParse` for invalid syntax and
/// `ConfigError::DotenvIo` when the file exists but cannot be read.
/// A missing `.env` file is not an error.
///
/// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
pub fn load_dotenv() -> Result<(), ConfigError> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ConfigError::DotenvParse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}

fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

/// Captures and interpolates every interpolable field of the document.
pub(crate) fn interpolate_sections(config: &mut Configuration, env: &EnvHandle) {
    capture_all(config.databases.as_mut(), env);
    capture_all(config.api_endpoints.as_mut(), env);
    capture_all(config.oauths.as_mut(), env);
    capture_all(config.notifications.as_mut(), env);
    if let Some(cache) = config.cache.as_mut() {
        capture(cache, env);
    }
}

/// Puts captured placeholders back into every unedited interpolated field.
pub(crate) fn restore_sections(config: &mut Configuration) {
    restore_all(config.databases.as_mut());
    restore_all(config.api_endpoints.as_mut());
    restore_all(config.oauths.as_mut());
    restore_all(config.notifications.as_mut());
    if let Some(cache) = config.cache.as_mut() {
        restore(cache);
    }
}

fn section_len<T>(section: &Option<Vec<T>>) -> usize {
    section.as_ref().map_or(0, Vec::len)
}
