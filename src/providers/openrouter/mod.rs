//! OpenRouter backend
//!
//! Adapts the OpenRouter chat-completions API (REST plus `data:`-framed SSE
//! streaming) to the [`ContentGenerator`] contract.
//!
//! Known limitations, by design:
//! - Function call and function response parts are flattened to bracketed
//!   text placeholders on the way out; arguments and results are dropped.
//! - Image parts do not round-trip.
//! - Token counts are estimated locally (no upstream counting endpoint).
//! - Embedding is not available and always fails.
//!
//! [`ContentGenerator`]: crate::traits::ContentGenerator

mod builder;
mod client;
mod config;
mod streaming;
mod transformers;
mod types;

pub use builder::OpenRouterBuilder;
pub use client::OpenRouterClient;
pub use config::{DEFAULT_BASE_URL, OpenRouterConfig};
pub use streaming::OpenRouterEventConverter;
pub use types::{
    ContentSegment, MessageContent, OpenRouterChoice, OpenRouterMessage, OpenRouterRequest,
    OpenRouterResponse, OpenRouterResponseMessage, OpenRouterStreamChoice, OpenRouterStreamDelta,
    OpenRouterStreamEvent, OpenRouterUsage,
};
