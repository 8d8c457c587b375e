//! OpenRouter client implementing the [`ContentGenerator`] contract.

use async_trait::async_trait;

use crate::error::LlmError;
use crate::stream::ContentStream;
use crate::traits::ContentGenerator;
use crate::types::{
    CountTokensRequest, CountTokensResponse, EmbedContentRequest, EmbedContentResponse,
    GenerateContentRequest, GenerateContentResponse,
};
use crate::utils::api_error_from_response;
use crate::utils::streaming::StreamFactory;

use super::builder::OpenRouterBuilder;
use super::config::OpenRouterConfig;
use super::streaming::OpenRouterEventConverter;
use super::transformers;
use super::types::{OpenRouterRequest, OpenRouterResponse};

/// Identification headers sent with every request
const REFERER_VALUE: &str = "https://github.com/contentgen-rs/contentgen";
const TITLE_VALUE: &str = "contentgen";

/// Client for the OpenRouter chat-completions API.
///
/// Holds only immutable configuration and a shared HTTP client; concurrent
/// calls are independent. Each call issues exactly one outbound request.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    config: OpenRouterConfig,
    http_client: reqwest::Client,
}

impl OpenRouterClient {
    /// Create a client with a default HTTP client
    pub fn new(config: OpenRouterConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client reusing an existing HTTP client
    pub fn with_http_client(config: OpenRouterConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Start building a client
    pub fn builder() -> OpenRouterBuilder {
        OpenRouterBuilder::new()
    }

    /// The configured model identifier
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn chat_completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn build_headers(&self) -> Result<reqwest::header::HeaderMap, LlmError> {
        let mut headers = reqwest::header::HeaderMap::new();

        headers.insert(
            reqwest::header::AUTHORIZATION,
            reqwest::header::HeaderValue::from_str(&format!("Bearer {}", self.config.api_key))
                .map_err(|e| LlmError::ConfigurationError(format!("Invalid API key: {e}")))?,
        );
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            reqwest::header::HeaderName::from_static("http-referer"),
            reqwest::header::HeaderValue::from_static(REFERER_VALUE),
        );
        headers.insert(
            reqwest::header::HeaderName::from_static("x-title"),
            reqwest::header::HeaderValue::from_static(TITLE_VALUE),
        );

        Ok(headers)
    }

    /// POST the wire request and fail on a non-success status
    async fn send_request(&self, body: &OpenRouterRequest) -> Result<reqwest::Response, LlmError> {
        let url = self.chat_completions_url();
        tracing::debug!(
            target: "contentgen::openrouter",
            url = %url,
            model = %self.config.model,
            stream = body.stream.unwrap_or(false),
            "sending request"
        );

        let response = self
            .http_client
            .post(&url)
            .headers(self.build_headers()?)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error_from_response(response).await);
        }

        Ok(response)
    }
}

#[async_trait]
impl ContentGenerator for OpenRouterClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let body = transformers::build_request(&self.config.model, &request);
        let response = self.send_request(&body).await?;

        let text = response
            .text()
            .await
            .map_err(|e| LlmError::HttpError(e.to_string()))?;
        let wire: OpenRouterResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::ParseError(format!("Failed to parse OpenRouter response: {e}")))?;

        Ok(transformers::convert_response(wire))
    }

    async fn generate_content_stream(
        &self,
        request: GenerateContentRequest,
    ) -> Result<ContentStream, LlmError> {
        let mut body = transformers::build_request(&self.config.model, &request);
        body.stream = Some(true);

        let url = self.chat_completions_url();
        tracing::debug!(
            target: "contentgen::openrouter",
            url = %url,
            model = %self.config.model,
            stream = true,
            "sending request"
        );

        let request_builder = self
            .http_client
            .post(&url)
            .headers(self.build_headers()?)
            .json(&body);

        StreamFactory::create_sse_stream(request_builder, OpenRouterEventConverter).await
    }

    async fn count_tokens(
        &self,
        request: CountTokensRequest,
    ) -> Result<CountTokensResponse, LlmError> {
        // No counting endpoint upstream; estimate locally
        Ok(CountTokensResponse {
            total_tokens: transformers::estimate_tokens(&request.contents),
        })
    }

    async fn embed_content(
        &self,
        _request: EmbedContentRequest,
    ) -> Result<EmbedContentResponse, LlmError> {
        Err(LlmError::UnsupportedOperation(
            "OpenRouter does not support content embedding".to_string(),
        ))
    }
}
