//! Shared utilities for provider backends.

pub mod streaming;

use crate::error::LlmError;

/// Turn a non-success HTTP response into an [`LlmError::ApiError`].
///
/// The raw body text is preserved in the message; when the body is a JSON
/// document it is also attached as structured details.
pub(crate) async fn api_error_from_response(response: reqwest::Response) -> LlmError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    let details = serde_json::from_str(&body).ok();
    LlmError::ApiError {
        code: status.as_u16(),
        message: format!("HTTP {status}: {body}"),
        details,
    }
}
