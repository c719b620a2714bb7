//! Client configuration

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use crate::error::{Result, SdkError};

/// Local development endpoint of the generation service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Header carrying the API credential
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the service, including the API prefix
    pub base_url: String,
    /// Optional API key sent as `X-API-Key`
    pub api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given base URL without an API key
    ///
    /// The URL is not validated; a malformed value only fails once a request
    /// is attempted.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the API key. An empty key is treated as no key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = if api_key.is_empty() { None } else { Some(api_key) };
        self
    }

    /// Builds the header set attached to every request
    pub fn request_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(api_key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            let mut value = HeaderValue::from_str(api_key).map_err(|_| {
                SdkError::InvalidConfig("API key is not a valid header value".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static("x-api-key"), value);
        }

        Ok(headers)
    }
}
