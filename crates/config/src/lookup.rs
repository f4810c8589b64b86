//! Lookup accessors over the document's collections.
//!
//! Responsibilities:
//! - Find records by ID (or name) with case-insensitive matching.
//! - Collect records by `GroupID`.
//! - Resolve the default endpoint and notification when no ID is given.
//! - Find flags by a key with `_` and `-` separators ignored.
//!
//! Does NOT handle:
//! - Typed conversion of flag values (see `flag_value.rs` and `Flag`).
//!
//! Invariants:
//! - "Not found" is `None` or an empty `Vec`, never an error.
//! - Uniqueness is not enforced; the first match in document order wins.
//! - Records without a `GroupID` never match a group lookup.

use crate::types::{
    Configuration, DatabaseInfo, DirectoryInfo, DomainInfo, EndpointInfo, Flag, NotificationInfo,
    OAuthProviderInfo, SecretInfo, SourceInfo,
};

/// Case-insensitive string equality using Unicode lowercase mapping.
pub(crate) fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Returns the first item whose key matches `key` case-insensitively.
///
/// An empty `key` never matches.
pub fn find_by_key<'a, T>(
    items: Option<&'a [T]>,
    key_of: impl Fn(&T) -> &str,
    key: &str,
) -> Option<&'a T> {
    if key.is_empty() {
        return None;
    }
    items?.iter().find(|&item| eq_fold(key_of(item), key))
}

/// Mutable counterpart of [`find_by_key`].
pub fn find_by_key_mut<'a, T>(
    items: Option<&'a mut [T]>,
    key_of: impl Fn(&T) -> &str,
    key: &str,
) -> Option<&'a mut T> {
    if key.is_empty() {
        return None;
    }
    items?.iter_mut().find(|item| eq_fold(key_of(&**item), key))
}

/// Returns every item whose group matches `group` case-insensitively.
pub fn filter_by_group<'a, T>(
    items: Option<&'a [T]>,
    group_of: impl Fn(&T) -> Option<&str>,
    group: &str,
) -> Vec<&'a T> {
    if group.is_empty() {
        return Vec::new();
    }
    items
        .unwrap_or_default()
        .iter()
        .filter(|&item| group_of(item).is_some_and(|g| eq_fold(g, group)))
        .collect()
}

fn key_or_default<'a>(id: &'a str, default: Option<&'a str>) -> Option<&'a str> {
    if id.is_empty() {
        default.filter(|d| !d.is_empty())
    } else {
        Some(id)
    }
}

fn normalize_flag_key(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn find_flag(flags: Option<&[Flag]>, key: &str) -> Flag {
    let key = key.trim();
    let wanted = normalize_flag_key(key);
    flags
        .unwrap_or_default()
        .iter()
        .find(|flag| normalize_flag_key(&flag.key) == wanted)
        .cloned()
        .unwrap_or_else(|| Flag {
            key: key.to_string(),
            value: None,
        })
}

impl Configuration {
    /// Database by ID.
    pub fn database(&self, id: &str) -> Option<&DatabaseInfo> {
        find_by_key(self.databases.as_deref(), |d| d.id.as_str(), id)
    }

    pub fn database_mut(&mut self, id: &str) -> Option<&mut DatabaseInfo> {
        find_by_key_mut(self.databases.as_deref_mut(), |d| d.id.as_str(), id)
    }

    /// Databases in a group.
    pub fn database_group(&self, group: &str) -> Vec<&DatabaseInfo> {
        filter_by_group(self.databases.as_deref(), |d| d.group_id.as_deref(), group)
    }

    /// Endpoint by ID; an empty `id` selects `DefaultEndpointID`.
    pub fn endpoint(&self, id: &str) -> Option<&EndpointInfo> {
        let key = key_or_default(id, self.default_endpoint_id.as_deref())?;
        find_by_key(self.api_endpoints.as_deref(), |e| e.id.as_str(), key)
    }

    pub fn endpoint_mut(&mut self, id: &str) -> Option<&mut EndpointInfo> {
        let key = key_or_default(id, self.default_endpoint_id.as_deref())?.to_string();
        find_by_key_mut(self.api_endpoints.as_deref_mut(), |e| e.id.as_str(), &key)
    }

    pub fn endpoint_group(&self, group: &str) -> Vec<&EndpointInfo> {
        filter_by_group(
            self.api_endpoints.as_deref(),
            |e| e.group_id.as_deref(),
            group,
        )
    }

    /// Notification by ID; an empty `id` selects `DefaultNotificationID`.
    pub fn notification(&self, id: &str) -> Option<&NotificationInfo> {
        let key = key_or_default(id, self.default_notification_id.as_deref())?;
        find_by_key(self.notifications.as_deref(), |n| n.id.as_str(), key)
    }

    pub fn notification_mut(&mut self, id: &str) -> Option<&mut NotificationInfo> {
        let key = key_or_default(id, self.default_notification_id.as_deref())?.to_string();
        find_by_key_mut(self.notifications.as_deref_mut(), |n| n.id.as_str(), &key)
    }

    pub fn oauth(&self, id: &str) -> Option<&OAuthProviderInfo> {
        find_by_key(self.oauths.as_deref(), |o| o.id.as_str(), id)
    }

    pub fn source(&self, id: &str) -> Option<&SourceInfo> {
        find_by_key(self.sources.as_deref(), |s| s.id.as_str(), id)
    }

    /// Domain by name.
    pub fn domain(&self, name: &str) -> Option<&DomainInfo> {
        find_by_key(self.domains.as_deref(), |d| d.name.as_str(), name)
    }

    /// Directory by its group ID.
    pub fn directory(&self, group: &str) -> Option<&DirectoryInfo> {
        find_by_key(self.directories.as_deref(), |d| d.group_id.as_str(), group)
    }

    /// Item `key` of the directory in `group`.
    pub fn directory_item(&self, group: &str, key: &str) -> Option<&Flag> {
        let directory = self.directory(group)?;
        find_by_key(Some(directory.items.as_slice()), |f| f.key.as_str(), key)
    }

    pub fn secret(&self, id: &str) -> Option<&SecretInfo> {
        find_by_key(self.secrets.as_deref(), |s| s.id.as_str(), id)
    }

    pub fn secret_group(&self, group: &str) -> Vec<&SecretInfo> {
        filter_by_group(self.secrets.as_deref(), |s| s.group_id.as_deref(), group)
    }

    /// Flag whose key matches `key` once `_` and `-` are ignored on both sides.
    ///
    /// Returns a flag with the trimmed key and no value when nothing matches.
    pub fn flag(&self, key: &str) -> Flag {
        find_flag(self.flags.as_deref(), key)
    }
}

impl EndpointInfo {
    /// Endpoint-scoped secret by ID.
    pub fn secret(&self, id: &str) -> Option<&SecretInfo> {
        find_by_key(self.secrets.as_deref(), |s| s.id.as_str(), id)
    }

    pub fn secret_group(&self, group: &str) -> Vec<&SecretInfo> {
        filter_by_group(self.secrets.as_deref(), |s| s.group_id.as_deref(), group)
    }

    /// Endpoint-scoped flag, matched like [`Configuration::flag`].
    pub fn flag(&self, key: &str) -> Flag {
        find_flag(self.flags.as_deref(), key)
    }
}
