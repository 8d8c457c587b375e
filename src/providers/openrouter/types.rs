//! OpenRouter wire schema.
//!
//! Request/response shapes of the chat-completions endpoint, kept separate
//! from the normalized types in [`crate::types`]. Response fields the
//! adapter does not consume are omitted; serde ignores them on
//! deserialization.

use serde::{Deserialize, Serialize};

/// Chat-completions request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterRequest {
    /// Target model identifier
    pub model: String,
    /// Conversation messages, in order
    pub messages: Vec<OpenRouterMessage>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Completion token limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i32>,
    /// Nucleus sampling probability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Request an SSE stream instead of a single document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

/// A single request message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterMessage {
    /// `system`, `user` or `assistant`
    pub role: String,
    /// Message content
    pub content: MessageContent,
}

/// Message content: a plain string or a list of typed segments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text content
    Text(String),
    /// Structured content segments
    Segments(Vec<ContentSegment>),
}

/// One typed content segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSegment {
    /// Segment type, e.g. `text` or `image_url`
    #[serde(rename = "type")]
    pub segment_type: String,
    /// Text payload for `text` segments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Image URL payload for `image_url` segments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Non-streaming chat-completions response
#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterResponse {
    /// Response identifier
    pub id: Option<String>,
    /// Completion choices; only the first is consumed
    #[serde(default)]
    pub choices: Vec<OpenRouterChoice>,
    /// Token usage counts
    pub usage: Option<OpenRouterUsage>,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterChoice {
    /// The completed message
    pub message: OpenRouterResponseMessage,
    /// Why the provider stopped generating
    pub finish_reason: Option<String>,
}

/// The message inside a completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterResponseMessage {
    /// Role reported by the provider
    pub role: Option<String>,
    /// Completed message text
    pub content: Option<String>,
}

/// Token usage counts
#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterUsage {
    /// Tokens in the prompt
    pub prompt_tokens: Option<u32>,
    /// Tokens in the completion
    pub completion_tokens: Option<u32>,
    /// Total tokens
    pub total_tokens: Option<u32>,
}

/// One parsed streaming event
#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterStreamEvent {
    /// Incremental choices; only the first is consumed
    pub choices: Option<Vec<OpenRouterStreamChoice>>,
}

/// One streaming choice
#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterStreamChoice {
    /// The incremental update for this choice
    pub delta: Option<OpenRouterStreamDelta>,
}

/// The incremental update within a streaming choice
#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterStreamDelta {
    /// Role announcement, present on the first event of a stream
    pub role: Option<String>,
    /// Next fragment of completion text
    pub content: Option<String>,
}
