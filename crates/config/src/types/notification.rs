//! Notification section records.
//!
//! Responsibilities:
//! - Define `NotificationInfo` (connection to a notify API) and its recipients.
//! - Declare the host, credential and addressing fields as interpolable.
//!
//! Does NOT handle:
//! - Synthesizing IDs for unnamed records (see `defaults.rs`).

use serde::{Deserialize, Serialize};

use crate::raw::{Interpolable, RawValues};

/// A standing recipient of a notification channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NotificationRecipient {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    /// E-mail address or any other identity the channel delivers to.
    pub address: String,
}

/// Settings for one notification channel (e-mail or messaging).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NotificationInfo {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "APIHost")]
    pub api_host: String,
    #[serde(rename = "APIPath")]
    pub api_path: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub login: String,
    pub password: String,
    pub active: bool,
    pub sender_address: String,
    pub sender_name: String,
    pub reply_to: String,
    pub recipients: Vec<NotificationRecipient>,
    #[serde(skip)]
    pub raw: RawValues,
}

impl Interpolable for NotificationInfo {
    fn interpolable_fields(&mut self) -> (Vec<(&'static str, &mut String)>, &mut RawValues) {
        (
            vec![
                ("APIHost", &mut self.api_host),
                ("Login", &mut self.login),
                ("Password", &mut self.password),
                ("SenderAddress", &mut self.sender_address),
                ("ReplyTo", &mut self.reply_to),
            ],
            &mut self.raw,
        )
    }
}
