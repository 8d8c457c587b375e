//! Normalized request/response types shared by all provider backends.
//!
//! These types mirror the generate-content wire schema consumed by callers:
//! field names and enum values are a fixed contract, preserved through serde
//! renames rather than Rust naming.

mod content;
mod generation;

pub use content::{Content, ContentInput, FunctionCall, FunctionResponse, Part};
pub use generation::{
    Candidate, ContentEmbedding, CountTokensRequest, CountTokensResponse, EmbedContentRequest,
    EmbedContentResponse, FinishReason, GenerateContentConfig, GenerateContentRequest,
    GenerateContentResponse, UsageMetadata,
};
