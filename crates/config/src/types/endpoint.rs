//! API endpoint section records.

use serde::{Deserialize, Serialize};

use crate::raw::{Interpolable, RawValues};
use crate::types::{Flag, SecretInfo};

/// An external API this application talks to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EndpointInfo {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    /// Absolute URL of the resource.
    pub address: String,
    #[serde(rename = "GroupID", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Static bearer token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "APIKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Secrets scoped to this endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Vec<SecretInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<Flag>>,
    #[serde(skip)]
    pub raw: RawValues,
}

impl Interpolable for EndpointInfo {
    fn interpolable_fields(&mut self) -> (Vec<(&'static str, &mut String)>, &mut RawValues) {
        let mut fields = vec![("Address", &mut self.address)];
        if let Some(api_key) = self.api_key.as_mut() {
            fields.push(("APIKey", api_key));
        }
        if let Some(token) = self.token.as_mut() {
            fields.push(("Token", token));
        }
        (fields, &mut self.raw)
    }

    fn interpolates(&self) -> bool {
        !self.address.is_empty()
    }
}
