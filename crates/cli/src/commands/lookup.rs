//! Record, flag and field lookups.
//!
//! Each command prints the match as JSON (flags print their bare value) and
//! fails with [`NotFound`] when nothing matches.

use std::path::Path;

use anyhow::Result;

use super::{emit, load_document, to_json};
use crate::error::NotFound;

pub fn database(source: Option<&str>, id: &str, output_file: Option<&Path>) -> Result<()> {
    let config = load_document(source)?;
    let database = config
        .database(id)
        .ok_or_else(|| NotFound::new("Database", id))?;
    emit(&to_json(database)?, output_file)
}

pub fn endpoint(source: Option<&str>, id: &str, output_file: Option<&Path>) -> Result<()> {
    let config = load_document(source)?;
    let endpoint = config
        .endpoint(id)
        .ok_or_else(|| NotFound::new("Endpoint", display_id(id)))?;
    emit(&to_json(endpoint)?, output_file)
}

pub fn notification(source: Option<&str>, id: &str, output_file: Option<&Path>) -> Result<()> {
    let config = load_document(source)?;
    let notification = config
        .notification(id)
        .ok_or_else(|| NotFound::new("Notification", display_id(id)))?;
    emit(&to_json(notification)?, output_file)
}

pub fn flag(source: Option<&str>, key: &str, output_file: Option<&Path>) -> Result<()> {
    let config = load_document(source)?;
    let value = config
        .flag(key)
        .value
        .ok_or_else(|| NotFound::new("Flag", key))?;
    emit(&format!("{value}\n"), output_file)
}

pub fn field(source: Option<&str>, name: &str, output_file: Option<&Path>) -> Result<()> {
    let config = load_document(source)?;
    let value = config
        .field(name)
        .ok_or_else(|| NotFound::new("Field", name))?;
    emit(&to_json(&value)?, output_file)
}

fn display_id(id: &str) -> &str {
    if id.is_empty() { "(default)" } else { id }
}
