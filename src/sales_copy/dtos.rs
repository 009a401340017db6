use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::copywriter::{DEFAULT_PLATFORM, DEFAULT_TONE};

const MAX_URL_LEN: usize = 2048;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExtractRequest {
    /// Absolute http(s) URL of the product page.
    #[schema(example = "https://item.rakuten.co.jp/shop/item-123/")]
    pub url: String,
    /// Target platform for the call-to-action; unknown ids use `base`.
    #[serde(default = "default_platform")]
    #[schema(default = "base", example = "shopify")]
    pub platform: String,
    /// Copy tone; unknown ids use `standard`.
    #[serde(default = "default_tone")]
    #[schema(default = "standard", example = "premium")]
    pub tone: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

fn default_platform() -> String {
    DEFAULT_PLATFORM.to_string()
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExtractResponse {
    pub success: bool,
    pub raw_description: String,
    pub sales_copy_md: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ExtractRequest {
    /// Checks the URL before anything goes over the network.
    pub fn validate(&self) -> Result<Url, String> {
        let raw = self.url.trim();
        if raw.is_empty() {
            return Err("URL cannot be empty".to_string());
        }
        if raw.len() > MAX_URL_LEN {
            return Err("URL too long".to_string());
        }

        let url = Url::parse(raw).map_err(|err| format!("invalid URL: {err}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err("URL must use http or https".to_string());
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err("URL must include a host".to_string());
        }
        Ok(url)
    }
}
