//! The provider-agnostic content generation contract.

use async_trait::async_trait;

use crate::error::LlmError;
use crate::stream::ContentStream;
use crate::types::{
    CountTokensRequest, CountTokensResponse, EmbedContentRequest, EmbedContentResponse,
    GenerateContentRequest, GenerateContentResponse,
};

/// The contract every backend implements.
///
/// Backends are selected at construction time and used through this trait;
/// callers never depend on a concrete adapter type. A backend that does not
/// support an operation returns [`LlmError::UnsupportedOperation`] instead of
/// attempting a network call.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate a complete response for the given request
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError>;

    /// Generate a response as a lazy stream of partial responses
    async fn generate_content_stream(
        &self,
        request: GenerateContentRequest,
    ) -> Result<ContentStream, LlmError>;

    /// Count (or estimate) the tokens in the request contents
    async fn count_tokens(
        &self,
        request: CountTokensRequest,
    ) -> Result<CountTokensResponse, LlmError>;

    /// Embed the request contents
    async fn embed_content(
        &self,
        request: EmbedContentRequest,
    ) -> Result<EmbedContentResponse, LlmError>;
}
