//! Streaming response types.

use std::pin::Pin;

use futures::Stream;

use crate::error::LlmError;
use crate::types::GenerateContentResponse;

/// A lazy sequence of partial generation responses.
///
/// Each item carries the next increment of model output. Dropping the stream
/// cancels the underlying request and releases the connection; no explicit
/// close call is needed.
pub type ContentStream =
    Pin<Box<dyn Stream<Item = Result<GenerateContentResponse, LlmError>> + Send>>;
