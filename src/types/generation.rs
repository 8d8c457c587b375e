//! Generation request/response shapes and token accounting types.

use serde::{Deserialize, Serialize};

use super::{Content, ContentInput};

/// A normalized content generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// The model to use for generation
    pub model: String,
    /// The conversation so far, in order
    pub contents: Vec<ContentInput>,
    /// Optional generation configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<GenerateContentConfig>,
}

impl GenerateContentRequest {
    /// Create a request for the given model and contents
    pub fn new(model: impl Into<String>, contents: Vec<ContentInput>) -> Self {
        Self {
            model: model.into(),
            contents,
            config: None,
        }
    }

    /// Attach a generation configuration
    pub fn with_config(mut self, config: GenerateContentConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Generation configuration: system instruction plus sampling parameters.
///
/// Unset fields are omitted on the wire so the provider applies its own
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateContentConfig {
    /// Developer-set system instruction, prepended to the conversation
    #[serde(skip_serializing_if = "Option::is_none", rename = "systemInstruction")]
    pub system_instruction: Option<Content>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none", rename = "maxOutputTokens")]
    pub max_output_tokens: Option<i32>,
    /// Nucleus sampling probability
    #[serde(skip_serializing_if = "Option::is_none", rename = "topP")]
    pub top_p: Option<f64>,
}

impl GenerateContentConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the system instruction
    pub fn with_system_instruction(mut self, instruction: Content) -> Self {
        self.system_instruction = Some(instruction);
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of output tokens
    pub fn with_max_output_tokens(mut self, max: i32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }

    /// Set the nucleus sampling probability
    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

/// A normalized content generation response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidate completions; adapters in this crate produce at most one
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Token usage for the request, when the provider reported it
    #[serde(skip_serializing_if = "Option::is_none", rename = "usageMetadata")]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, with text parts newline-joined.
    ///
    /// Returns `None` when there is no candidate or no text part.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let texts: Vec<&str> = candidate
            .content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.join("\n"))
        }
    }
}

/// A single candidate completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// The generated content, role-tagged `model`
    pub content: Content,
    /// Why generation stopped; absent on streaming chunks
    #[serde(skip_serializing_if = "Option::is_none", rename = "finishReason")]
    pub finish_reason: Option<FinishReason>,
    /// Position of this candidate in the response
    pub index: i32,
}

/// Reason the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// Natural stop point or stop sequence reached
    #[serde(rename = "STOP")]
    Stop,
    /// The configured token limit was reached
    #[serde(rename = "MAX_TOKENS")]
    MaxTokens,
    /// The content was flagged by a safety filter
    #[serde(rename = "SAFETY")]
    Safety,
    /// The content was flagged for recitation
    #[serde(rename = "RECITATION")]
    Recitation,
    /// Any other or unknown reason
    #[serde(rename = "OTHER")]
    Other,
}

/// Token usage reported for a generation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(skip_serializing_if = "Option::is_none", rename = "promptTokenCount")]
    pub prompt_token_count: Option<u32>,
    /// Tokens across the response candidates
    #[serde(
        skip_serializing_if = "Option::is_none",
        rename = "candidatesTokenCount"
    )]
    pub candidates_token_count: Option<u32>,
    /// Total tokens for the request
    #[serde(skip_serializing_if = "Option::is_none", rename = "totalTokenCount")]
    pub total_token_count: Option<u32>,
}

/// A token counting request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountTokensRequest {
    /// The model the count is for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// The contents to count
    pub contents: Vec<ContentInput>,
}

impl CountTokensRequest {
    /// Create a counting request for the given contents
    pub fn new(contents: Vec<ContentInput>) -> Self {
        Self {
            model: None,
            contents,
        }
    }
}

/// A token counting response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountTokensResponse {
    /// Number of tokens in the request contents
    #[serde(rename = "totalTokens")]
    pub total_tokens: u32,
}

/// An embedding request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedContentRequest {
    /// The embedding model to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// The contents to embed
    pub contents: Vec<ContentInput>,
}

/// An embedding response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedContentResponse {
    /// One embedding per input content
    pub embeddings: Vec<ContentEmbedding>,
}

/// A single embedding vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEmbedding {
    /// The embedding values
    pub values: Vec<f32>,
}
