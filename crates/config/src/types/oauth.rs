//! OAuth provider section records.

use serde::{Deserialize, Serialize};

use crate::raw::{Interpolable, RawValues};

/// Registration of this application with an OAuth provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OAuthProviderInfo {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub icon_url: String,
    pub embed_text: String,
    /// Label shown on sign-in controls.
    pub label: String,
    /// Application ID registered with the provider.
    #[serde(rename = "ClientID")]
    pub client_id: String,
    pub provider_host: String,
    /// Web URI used to obtain authorization.
    pub provider_web_uri: String,
    /// API URI used to obtain access keys.
    pub provider_api_uri: String,
    pub response_type: String,
    pub scope: String,
    #[serde(skip)]
    pub raw: RawValues,
}

impl Interpolable for OAuthProviderInfo {
    fn interpolable_fields(&mut self) -> (Vec<(&'static str, &mut String)>, &mut RawValues) {
        (
            vec![
                ("IconUrl", &mut self.icon_url),
                ("ProviderHost", &mut self.provider_host),
                ("ProviderWebUri", &mut self.provider_web_uri),
                ("ProviderApiUri", &mut self.provider_api_uri),
            ],
            &mut self.raw,
        )
    }
}
