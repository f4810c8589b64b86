//! The root configuration document.
//!
//! Responsibilities:
//! - Define `Configuration`, the aggregate of every section.
//! - Keep provenance (origin string, locality) and the environment handle out of
//!   the serialized form.
//!
//! Does NOT handle:
//! - Loading, saving, or reloading (see `loader.rs` and `persistence.rs`).
//! - Lookups (see `lookup.rs`).
//!
//! Invariants:
//! - Every section is optional; `None` means "not configured" and is distinct
//!   from an empty collection.
//! - Absent sections are omitted on save.

use serde::{Deserialize, Serialize};

use crate::env::EnvHandle;
use crate::types::{
    CacheInfo, DatabaseInfo, DirectoryInfo, DomainInfo, EndpointInfo, Flag, NotificationInfo,
    OAuthProviderInfo, QueueInfo, SecretInfo, SourceInfo,
};

/// Application configuration loaded from a JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Configuration {
    /// External API endpoints this application communicates with.
    #[serde(rename = "APIEndpoints", skip_serializing_if = "Option::is_none")]
    pub api_endpoints: Option<Vec<EndpointInfo>>,
    #[serde(rename = "ApplicationID", skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_key: Option<String>,
    /// Domain of the cookies this application sends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_domain: Option<String>,
    /// Origins allowed for cross-origin requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_origin_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<DatabaseInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directories: Option<Vec<DirectoryInfo>>,
    #[serde(rename = "DefaultDatabaseID", skip_serializing_if = "Option::is_none")]
    pub default_database_id: Option<String>,
    /// Endpoint returned by `endpoint("")`.
    #[serde(rename = "DefaultEndpointID", skip_serializing_if = "Option::is_none")]
    pub default_endpoint_id: Option<String>,
    /// Notification returned by `notification("")`.
    #[serde(
        rename = "DefaultNotificationID",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_notification_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<DomainInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<Flag>>,
    #[serde(rename = "HostInternalURL", skip_serializing_if = "Option::is_none")]
    pub host_internal_url: Option<String>,
    #[serde(rename = "HostExternalURL", skip_serializing_if = "Option::is_none")]
    pub host_external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_port: Option<i64>,
    /// Application-wide JWT secret.
    ///
    /// Deprecated in favour of `secrets`; still defaulted for older consumers.
    #[serde(rename = "JWTSecret", skip_serializing_if = "Option::is_none")]
    pub jwt_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_serial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<NotificationInfo>>,
    #[serde(rename = "OAuths", skip_serializing_if = "Option::is_none")]
    pub oauths: Option<Vec<OAuthProviderInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<QueueInfo>,
    /// Read timeout for uploads, in the unit the host application expects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Vec<SecretInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_timeout: Option<i64>,

    /// Origin the document was loaded from (path or URL).
    #[serde(skip)]
    pub(crate) file_name: String,
    #[serde(skip)]
    pub(crate) local: bool,
    #[serde(skip)]
    pub(crate) env: EnvHandle,
}

impl Configuration {
    /// The path or URL this document was loaded from.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Whether the origin is a local file, and therefore savable.
    pub fn is_local(&self) -> bool {
        self.local
    }
}
