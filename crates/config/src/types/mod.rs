//! Configuration document type definitions.
//!
//! Responsibilities:
//! - Define the root `Configuration` and every section record it holds.
//! - Map Rust field names to the PascalCase JSON keys of existing documents.
//! - Declare which string fields take part in `${VAR}` interpolation.
//!
//! Does NOT handle:
//! - Loading or saving documents (see `loader` and `persistence` modules).
//! - Default-fill (see `defaults` module).
//!
//! Invariants:
//! - Unknown JSON keys are ignored on load.
//! - Raw-value side tables (`raw` fields) are `#[serde(skip)]` and never persisted.

mod database;
mod document;
mod endpoint;
mod flag;
mod notification;
mod oauth;
mod records;

pub use database::{DatabaseInfo, SequenceGeneratorInfo};
pub use document::Configuration;
pub use endpoint::EndpointInfo;
pub use flag::Flag;
pub use notification::{NotificationInfo, NotificationRecipient};
pub use oauth::OAuthProviderInfo;
pub use records::{CacheInfo, DirectoryInfo, DomainInfo, QueueInfo, SecretInfo, SourceInfo};
