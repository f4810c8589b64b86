//! Name-based access to top-level document fields.
//!
//! Field names are matched loosely: case, surrounding whitespace, spaces,
//! underscores and dashes are ignored, so `application_name`, `Application Name`
//! and `ApplicationName` all select the same field.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::Configuration;

impl Configuration {
    /// The in-memory (interpolated) value of the top-level field `name`, as JSON.
    ///
    /// Returns `None` for unknown names and for sections that are not configured.
    pub fn field(&self, name: &str) -> Option<Value> {
        let wanted = normalize_field_name(name);
        if wanted.is_empty() {
            return None;
        }

        let Value::Object(fields) = serde_json::to_value(self).ok()? else {
            return None;
        };
        fields
            .into_iter()
            .find(|(key, _)| normalize_field_name(key) == wanted)
            .map(|(_, value)| value)
    }
}

/// Returns the top-level field `name` converted to `T`.
///
/// Unknown names, unconfigured sections and values of another type all yield
/// `T::default()`.
///
/// ```
/// use appcfg::{Configuration, get_field};
///
/// let mut config = Configuration::default();
/// config.host_port = Some(8443);
/// assert_eq!(get_field::<i64>(&config, "host_port"), 8443);
/// assert_eq!(get_field::<String>(&config, "application_name"), "");
/// ```
pub fn get_field<T: DeserializeOwned + Default>(config: &Configuration, name: &str) -> T {
    config
        .field(name)
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

fn normalize_field_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}
