//! Save command implementation.

use anyhow::{Context, Result};
use tracing::info;

use super::load_document;

/// Loads the document and writes it back in normalized form.
pub fn run(source: Option<&str>) -> Result<()> {
    let mut config = load_document(source)?;
    config
        .save()
        .with_context(|| format!("Failed to save configuration to {}", config.file_name()))?;

    info!(path = %config.file_name(), "Configuration saved");
    eprintln!("Saved {}", config.file_name());
    Ok(())
}
