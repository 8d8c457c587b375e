//! Builder for [`OpenRouterClient`].

use crate::error::LlmError;

use super::client::OpenRouterClient;
use super::config::OpenRouterConfig;

/// Builds an [`OpenRouterClient`], validating configuration up front.
///
/// Credential checks happen here rather than on each call: `build` is the
/// construction-time gate for a missing API key or model.
#[derive(Debug, Default)]
pub struct OpenRouterBuilder {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl OpenRouterBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Reuse an existing HTTP client
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Validate the configuration and build the client
    pub fn build(self) -> Result<OpenRouterClient, LlmError> {
        let mut config = OpenRouterConfig::new(
            self.api_key.unwrap_or_default(),
            self.model.unwrap_or_default(),
        );
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        config.validate()?;

        Ok(match self.http_client {
            Some(http_client) => OpenRouterClient::with_http_client(config, http_client),
            None => OpenRouterClient::new(config),
        })
    }
}
