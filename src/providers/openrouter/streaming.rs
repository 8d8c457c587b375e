//! OpenRouter streaming event conversion.

use crate::error::LlmError;
use crate::types::GenerateContentResponse;
use crate::utils::streaming::SseEventConverter;

use super::transformers::convert_stream_event;
use super::types::OpenRouterStreamEvent;

/// Converts OpenRouter `data:` payloads into normalized partial responses.
///
/// Payloads that fail to parse are dropped so a single malformed upstream
/// event cannot abort the stream; this recovery is part of the adapter's
/// contract, not incidental.
#[derive(Debug, Clone, Copy)]
pub struct OpenRouterEventConverter;

impl SseEventConverter for OpenRouterEventConverter {
    fn convert_data(&self, data: &str) -> Option<Result<GenerateContentResponse, LlmError>> {
        match serde_json::from_str::<OpenRouterStreamEvent>(data) {
            Ok(event) => convert_stream_event(event).map(Ok),
            Err(e) => {
                tracing::debug!(target: "contentgen::openrouter", "discarding malformed stream event: {e}");
                None
            }
        }
    }
}
