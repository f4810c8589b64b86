//! Raw-value side tables for interpolated fields.
//!
//! Responsibilities:
//! - Record, per record and per field, the pre-interpolation text and the text it resolved to.
//! - Restore placeholders into a copy of a record before it is persisted.
//! - Re-capture and re-interpolate a record after it was persisted.
//!
//! Does NOT handle:
//! - Token substitution itself (see `env.rs`).
//! - Choosing when capture runs (see `loader.rs` and `persistence.rs`).
//!
//! Invariants:
//! - Side tables are never serialized; they exist only in memory.
//! - A restore only puts the raw text back when the visible value still equals the
//!   resolved text captured for it. A value the caller replaced is kept as-is.

use std::collections::BTreeMap;
use std::fmt;

use crate::env::EnvHandle;

/// Pre- and post-interpolation text of one field.
#[derive(Clone, PartialEq, Eq)]
pub struct RawValue {
    /// Text as it appeared in the source document.
    pub raw: String,
    /// Text produced by interpolating `raw`.
    pub resolved: String,
}

/// Per-record table mapping an interpolable field name to its [`RawValue`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawValues(BTreeMap<&'static str, RawValue>);

impl RawValues {
    /// Returns the raw entry captured for `field`.
    pub fn get(&self, field: &str) -> Option<&RawValue> {
        self.0.get(field)
    }

    /// Pre-interpolation text captured for `field`.
    pub fn raw(&self, field: &str) -> Option<&str> {
        self.get(field).map(|v| v.raw.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: &'static str, value: RawValue) {
        self.0.insert(field, value);
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

// Resolved text may hold secrets, so only field names are printed.
impl fmt::Debug for RawValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

/// A record with string fields that take part in interpolation.
pub(crate) trait Interpolable {
    /// Borrows the interpolable fields together with the record's side table.
    ///
    /// Returning both from one call lets the borrows stay disjoint.
    fn interpolable_fields(&mut self) -> (Vec<(&'static str, &mut String)>, &mut RawValues);

    /// Whether the record takes part in interpolation at load time.
    ///
    /// Only `capture` consults this; `restore` always walks every captured entry.
    fn interpolates(&self) -> bool {
        true
    }
}

/// Captures each interpolable field into the side table and replaces the
/// visible value with its interpolated text.
pub(crate) fn capture<T: Interpolable>(record: &mut T, env: &EnvHandle) {
    let enabled = record.interpolates();
    let (fields, raw) = record.interpolable_fields();
    raw.clear();
    if !enabled {
        return;
    }
    for (name, value) in fields {
        let resolved = env.interpolate(value);
        let original = std::mem::replace(value, resolved.clone());
        raw.insert(
            name,
            RawValue {
                raw: original,
                resolved,
            },
        );
    }
}

/// Puts the captured raw text back into every field whose visible value is
/// still the resolved text. Edited fields are left alone.
pub(crate) fn restore<T: Interpolable>(record: &mut T) {
    let (fields, raw) = record.interpolable_fields();
    for (name, value) in fields {
        if let Some(entry) = raw.get(name)
            && *value == entry.resolved
        {
            value.clone_from(&entry.raw);
        }
    }
}

pub(crate) fn capture_all<T: Interpolable>(records: Option<&mut Vec<T>>, env: &EnvHandle) {
    for record in records.into_iter().flatten() {
        capture(record, env);
    }
}

pub(crate) fn restore_all<T: Interpolable>(records: Option<&mut Vec<T>>) {
    for record in records.into_iter().flatten() {
        restore(record);
    }
}
