//! Application configuration documents.
//!
//! This crate loads a JSON configuration document from a local file or an
//! HTTP(S) URL, fills defaults, resolves `${VAR}` placeholders from the
//! environment, and can write the document back with its placeholders intact.

pub mod constants;
pub mod defaults;
mod env;
mod error;
mod field;
mod flag_value;
mod loader;
pub mod lookup;
mod persistence;
mod raw;
mod source;
pub mod types;

pub use defaults::apply_defaults;
pub use env::{EnvHandle, EnvSource, ProcessEnv, interpolate, interpolate_with};
pub use error::ConfigError;
pub use field::get_field;
pub use flag_value::{FlagValue, get_flag};
pub use loader::{ConfigLoader, load_dotenv};
pub use lookup::{filter_by_group, find_by_key};
pub use raw::{RawValue, RawValues};
pub use source::Source;
pub use types::{
    CacheInfo, Configuration, DatabaseInfo, DirectoryInfo, DomainInfo, EndpointInfo, Flag,
    NotificationInfo, NotificationRecipient, OAuthProviderInfo, QueueInfo, SecretInfo,
    SequenceGeneratorInfo, SourceInfo,
};
