//! # contentgen
//!
//! A provider-agnostic content generation interface for Rust.
//!
//! The crate defines one normalized request/response schema and a single
//! [`ContentGenerator`] contract; provider backends adapt their own wire
//! formats to it. Callers pick a backend at construction time and use it
//! through the trait, so swapping providers never touches call sites.
//!
//! ## Quick start
//!
//! ```no_run
//! use contentgen::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), LlmError> {
//!     let client = OpenRouterClient::builder()
//!         .api_key(std::env::var("OPENROUTER_API_KEY").unwrap_or_default())
//!         .model("anthropic/claude-3-opus")
//!         .build()?;
//!
//!     let request = GenerateContentRequest::new(
//!         "anthropic/claude-3-opus",
//!         vec![Content::user("Hello!").into()],
//!     );
//!     let response = client.generate_content(request).await?;
//!     println!("{}", response.text().unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming
//!
//! [`ContentGenerator::generate_content_stream`] returns a lazy
//! [`ContentStream`](stream::ContentStream) of partial responses. The stream
//! holds the network connection for its lifetime; dropping it cancels the
//! request.
//!
//! [`ContentGenerator`]: traits::ContentGenerator
//! [`ContentGenerator::generate_content_stream`]: traits::ContentGenerator::generate_content_stream

pub mod error;
pub mod providers;
pub mod stream;
pub mod traits;
pub mod types;
pub mod utils;

pub use error::LlmError;
pub use stream::ContentStream;
pub use traits::ContentGenerator;

/// Common imports for working with the crate
pub mod prelude {
    pub use crate::error::LlmError;
    pub use crate::providers::openrouter::{OpenRouterBuilder, OpenRouterClient, OpenRouterConfig};
    pub use crate::stream::ContentStream;
    pub use crate::traits::ContentGenerator;
    pub use crate::types::{
        Candidate, Content, ContentInput, CountTokensRequest, CountTokensResponse,
        EmbedContentRequest, EmbedContentResponse, FinishReason, GenerateContentConfig,
        GenerateContentRequest, GenerateContentResponse, Part, UsageMetadata,
    };
}
