//! Database section records.
//!
//! Responsibilities:
//! - Define `DatabaseInfo` and its nested `SequenceGeneratorInfo`.
//! - Declare `ConnectionString` as the record's only interpolable field.
//!
//! Does NOT handle:
//! - Filling defaults such as placeholder characters (see `defaults.rs`).
//!
//! Invariants:
//! - JSON keys are the PascalCase names used by existing documents (`ID`, `GroupID`, ...).
//! - Absent optional fields are omitted on save rather than written as `null`.

use serde::{Deserialize, Serialize};

use crate::raw::{Interpolable, RawValues};

/// Queries used to emulate sequences on databases that lack them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SequenceGeneratorInfo {
    pub upsert_query: String,
    pub result_query: String,
    pub name_place_holder: String,
}

/// Connection and dialect settings for one database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DatabaseInfo {
    /// Group this connection belongs to, for `database_group` lookups.
    #[serde(rename = "GroupID", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(rename = "ID")]
    pub id: String,
    /// Driver-specific connection string; may contain `${VAR}` placeholders.
    pub connection_string: String,
    pub driver_name: String,
    /// `FILE` for file-based engines, `SERVER` for networked ones.
    pub storage_type: String,
    #[serde(rename = "HelperID")]
    pub helper_id: String,
    pub parameter_placeholder: String,
    pub parameter_in_sequence: bool,
    pub schema: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolate_tables: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_generator: Option<SequenceGeneratorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_enclosing_char: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_escape_char: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_open_connection: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_idle_connection: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connection_lifetime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connection_idle_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping: Option<bool>,
    /// Identifier escape characters. Use two characters (e.g. `[]`) for
    /// distinct opening and closing escapes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_word_escape_char: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_function: Option<String>,
    #[serde(rename = "UTCDateFunction", skip_serializing_if = "Option::is_none")]
    pub utc_date_function: Option<String>,
    #[serde(skip)]
    pub raw: RawValues,
}

impl Interpolable for DatabaseInfo {
    fn interpolable_fields(&mut self) -> (Vec<(&'static str, &mut String)>, &mut RawValues) {
        (
            vec![("ConnectionString", &mut self.connection_string)],
            &mut self.raw,
        )
    }

    // A record without a connection string has nothing to resolve.
    fn interpolates(&self) -> bool {
        !self.connection_string.is_empty()
    }
}
