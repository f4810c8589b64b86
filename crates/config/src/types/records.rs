//! Plain section records: cache, domains, queue, secrets, sources and directories.
//!
//! Only `CacheInfo` carries interpolable fields; the rest are data containers
//! that load and save verbatim.

use serde::{Deserialize, Serialize};

use crate::raw::{Interpolable, RawValues};
use crate::types::Flag;

/// Cache server connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CacheInfo {
    pub provider: String,
    pub address: String,
    pub password: String,
    #[serde(rename = "DB")]
    pub db: i64,
    #[serde(skip)]
    pub raw: RawValues,
}

impl Interpolable for CacheInfo {
    fn interpolable_fields(&mut self) -> (Vec<(&'static str, &mut String)>, &mut RawValues) {
        (
            vec![
                ("Address", &mut self.address),
                ("Password", &mut self.password),
            ],
            &mut self.raw,
        )
    }
}

/// LDAP domain used for authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DomainInfo {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub authorized_user: String,
    pub authorized_password: String,
    pub filter: String,
}

/// Message queue connector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct QueueInfo {
    #[serde(rename = "ID")]
    pub id: String,
    pub server_address_group: Vec<String>,
    pub cluster: String,
    #[serde(rename = "ClientID")]
    pub client_id: String,
    pub stream_name: String,
}

/// A named secret for application use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SecretInfo {
    #[serde(rename = "GroupID", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub value: String,
}

/// An inbound file folder watched by the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SourceInfo {
    #[serde(rename = "ID")]
    pub id: String,
    /// Inbound file type, e.g. `ORDER` or `SNAPSHOT`.
    #[serde(rename = "Type")]
    pub kind: String,
    pub source: String,
    /// Whether `Error` and `Success` are relative to `Source`.
    pub relative: bool,
    pub error: String,
    pub success: String,
    pub extension: String,
}

/// A group of key/value items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DirectoryInfo {
    #[serde(rename = "GroupID")]
    pub group_id: String,
    pub description: String,
    pub items: Vec<Flag>,
}
