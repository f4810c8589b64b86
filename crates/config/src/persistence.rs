//! Persistence of loaded documents.
//!
//! Responsibilities:
//! - Save a document back to its local origin with `${VAR}` placeholders restored.
//! - Reload a document in place from its origin.
//!
//! Does NOT handle:
//! - Fetching or parsing (see `loader.rs`).
//! - Locking. Callers sharing a document wrap it in their own lock.
//!
//! Invariants:
//! - Documents fetched over HTTP are never written.
//! - Writes are atomic (temp file + rename).
//! - A failed save or reload leaves the in-memory document unchanged.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::constants::TEMP_FILE_EXTENSION;
use crate::error::ConfigError;
use crate::loader::{ConfigLoader, interpolate_sections, restore_sections};
use crate::types::Configuration;

impl Configuration {
    /// Writes the document back to its origin file.
    ///
    /// Every interpolated field the caller has not changed is written with its
    /// original placeholder text; edited fields are written as they are. After
    /// a successful write the fields are re-captured from the written text and
    /// interpolated again.
    ///
    /// # Errors
    /// `NotLocalOrigin` for URL origins (nothing is written), `Serialize` or
    /// `WriteFile` when the document cannot be written.
    pub fn save(&mut self) -> Result<(), ConfigError> {
        if !self.local {
            return Err(ConfigError::NotLocalOrigin {
                origin: self.file_name.clone(),
            });
        }

        let mut persisted = self.persisted();
        let content = to_tab_indented_json(&persisted)?;
        let path = PathBuf::from(&self.file_name);
        atomic_write(&path, &content)?;

        interpolate_sections(&mut persisted, &self.env);
        *self = persisted;

        tracing::debug!(path = %path.display(), "Configuration saved atomically");
        Ok(())
    }

    /// A copy of the document as `save` would write it: unedited interpolated
    /// fields carry their original placeholder text.
    pub fn persisted(&self) -> Configuration {
        let mut persisted = self.clone();
        restore_sections(&mut persisted);
        persisted
    }

    /// Re-reads the document from its origin and replaces every field in place.
    ///
    /// The environment the document was loaded with is used again.
    ///
    /// # Errors
    /// Any load error; `self` is left untouched in that case.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let fresh = ConfigLoader::new(&self.file_name)
            .with_env_handle(self.env.clone())
            .load()?;
        *self = fresh;

        tracing::debug!(origin = %self.file_name, "Configuration reloaded");
        Ok(())
    }
}

fn to_tab_indented_json(config: &Configuration) -> Result<Vec<u8>, ConfigError> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
    config
        .serialize(&mut serializer)
        .map_err(ConfigError::Serialize)?;
    Ok(buffer)
}

fn atomic_write(path: &Path, content: &[u8]) -> Result<(), ConfigError> {
    // Write to a temporary sibling first, then rename over the target.
    let temp_path = temp_path_for(path);
    let result =
        std::fs::write(&temp_path, content).and_then(|()| std::fs::rename(&temp_path, path));

    if let Err(source) = result {
        if let Err(cleanup) = std::fs::remove_file(&temp_path)
            && cleanup.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(
                path = %temp_path.display(),
                error = %cleanup,
                "Failed to remove temporary configuration file"
            );
        }
        return Err(ConfigError::WriteFile {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// `<file>.<pid>.tmp` next to `path`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(format!(".{}.{TEMP_FILE_EXTENSION}", std::process::id()));
    path.with_file_name(name)
}
