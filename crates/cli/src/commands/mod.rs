//! CLI command implementations.

pub mod lookup;
pub mod save;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};
use appcfg::Configuration;
use serde::Serialize;

/// Loads the document named by `--source` / `APPCFG_SOURCE`.
pub fn load_document(source: Option<&str>) -> Result<Configuration> {
    let source = source
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .context("No configuration source given. Pass --source or set APPCFG_SOURCE")?;

    Configuration::load(source)
        .with_context(|| format!("Failed to load configuration from {source}"))
}

/// Pretty-prints `value` as JSON followed by a newline.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut output = serde_json::to_string_pretty(value).context("Failed to format output")?;
    output.push('\n');
    Ok(output)
}

/// Writes command output to `output_file`, or to stdout when none is given.
pub fn emit(output: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        std::fs::write(path, output)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!("Output written to {}", path.display());
    } else {
        print!("{}", output);
    }
    Ok(())
}
