//! OpenRouter provider configuration.

use crate::error::LlmError;

/// Default public OpenRouter endpoint
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Configuration for the OpenRouter backend.
///
/// Immutable once the client is constructed; concurrent calls share it
/// without synchronization.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// API key used for bearer authentication
    pub api_key: String,
    /// Model identifier, e.g. `anthropic/claude-3-opus`
    pub model: String,
    /// Base URL of the API
    pub base_url: String,
}

impl OpenRouterConfig {
    /// Create a configuration with the default public endpoint
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (e.g. for a self-hosted gateway)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Validate the configuration.
    ///
    /// Called by the builder before a client is handed out; the client
    /// itself does not re-check credentials at call time.
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::ConfigurationError(
                "OpenRouter API key is required".to_string(),
            ));
        }
        if self.model.is_empty() {
            return Err(LlmError::ConfigurationError(
                "Model identifier is required".to_string(),
            ));
        }
        Ok(())
    }
}
