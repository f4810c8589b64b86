//! Show command implementation.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use super::{emit, load_document, to_json};

pub fn run(source: Option<&str>, raw: bool, output_file: Option<&Path>) -> Result<()> {
    let config = load_document(source)?;
    info!(origin = %config.file_name(), raw, "Showing configuration");

    let output = if raw {
        to_json(&config.persisted())?
    } else {
        to_json(&config)?
    };
    emit(&output, output_file)
}
