//! Common streaming utilities
//!
//! Providers stream completions as `data: <json>` lines over a long-lived
//! HTTP response body. This module owns the framing: it reassembles lines
//! across network chunk boundaries and hands each payload to a
//! provider-specific converter. Multi-byte UTF-8 sequences split across
//! chunks stay in the byte buffer until their line completes, so decoding is
//! safe at any split offset.

use async_stream::stream;
use futures_util::StreamExt;

use crate::error::LlmError;
use crate::stream::ContentStream;
use crate::types::GenerateContentResponse;
use crate::utils::api_error_from_response;

const DATA_PREFIX: &str = "data: ";
const DONE_SENTINEL: &str = "[DONE]";

/// Converts one `data:` payload into a normalized partial response.
///
/// Returning `None` skips the event without output; a payload that is not
/// usable must never abort the stream.
pub trait SseEventConverter: Send + Sync {
    /// Convert a single event payload
    fn convert_data(&self, data: &str) -> Option<Result<GenerateContentResponse, LlmError>>;
}

/// Stream factory for creating provider streams from HTTP requests
pub struct StreamFactory;

impl StreamFactory {
    /// Send a streaming request and frame its response body.
    ///
    /// Fails before any data is read on a non-success status, and with
    /// [`LlmError::EmptyResponseBody`] when the provider answered 2xx with a
    /// zero-length body.
    pub async fn create_sse_stream<C>(
        request_builder: reqwest::RequestBuilder,
        converter: C,
    ) -> Result<ContentStream, LlmError>
    where
        C: SseEventConverter + 'static,
    {
        let response = request_builder
            .send()
            .await
            .map_err(|e| LlmError::HttpError(format!("Failed to send request: {e}")))?;

        if !response.status().is_success() {
            return Err(api_error_from_response(response).await);
        }

        if response.content_length() == Some(0) {
            return Err(LlmError::EmptyResponseBody);
        }

        let byte_stream = response.bytes_stream().map(|chunk| {
            chunk.map_err(|e| LlmError::StreamError(format!("Failed to read response body: {e}")))
        });

        Ok(sse_stream_from_bytes(byte_stream, converter))
    }
}

/// Frame a raw byte stream into `data:` events and convert each one.
///
/// Lines without the `data: ` prefix and the `[DONE]` sentinel are skipped;
/// only exhaustion of the underlying byte stream ends the sequence. A read
/// error is yielded once and terminates the stream. Emitted items preserve
/// the order of their source lines.
pub fn sse_stream_from_bytes<S, B, C>(byte_stream: S, converter: C) -> ContentStream
where
    S: futures::Stream<Item = Result<B, LlmError>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    C: SseEventConverter + 'static,
{
    Box::pin(stream! {
        let mut buffer: Vec<u8> = Vec::new();
        futures_util::pin_mut!(byte_stream);

        while let Some(chunk) = byte_stream.next().await {
            match chunk {
                Ok(chunk) => {
                    buffer.extend_from_slice(chunk.as_ref());
                    for line in drain_complete_lines(&mut buffer) {
                        let Some(data) = line.strip_prefix(DATA_PREFIX) else {
                            continue;
                        };
                        if data.trim() == DONE_SENTINEL {
                            continue;
                        }
                        if let Some(item) = converter.convert_data(data) {
                            yield item;
                        }
                    }
                }
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
        }
    })
}

/// Split off every complete line, leaving the trailing fragment buffered.
fn drain_complete_lines(buffer: &mut Vec<u8>) -> Vec<String> {
    let mut lines = Vec::new();
    while let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
        let rest = buffer.split_off(pos + 1);
        let mut line = std::mem::replace(buffer, rest);
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        lines.push(String::from_utf8_lossy(&line).into_owned());
    }
    lines
}
