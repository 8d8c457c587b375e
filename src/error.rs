//! Error types shared across all provider backends.

use thiserror::Error;

/// Unified error type for content generation operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// The provider returned a non-success HTTP status.
    ///
    /// `message` carries the status line and the raw response body text;
    /// `details` carries the body parsed as JSON when the provider returned
    /// a structured error document.
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Error message including the raw response body
        message: String,
        /// Structured error body, when the provider returned JSON
        details: Option<serde_json::Value>,
    },

    /// The request could not be sent or the connection failed before a
    /// status code was available.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// A streaming call succeeded at the HTTP layer but the response carried
    /// no body to read.
    #[error("Response body is empty")]
    EmptyResponseBody,

    /// A read of the streaming response body failed mid-stream.
    #[error("Stream error: {0}")]
    StreamError(String),

    /// A response body could not be parsed into the expected wire schema.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid or incomplete configuration.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The requested operation is not supported by this provider.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl LlmError {
    /// Create an API error without structured details
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }
}
