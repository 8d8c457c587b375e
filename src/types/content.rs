//! Conversation content: turns, parts, and function call/response payloads.

use serde::{Deserialize, Serialize};

/// A single conversation turn: a role plus an ordered list of parts.
///
/// Roles are free-form strings on the wire; the values `user`, `model` and
/// `system` are the ones providers assign meaning to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Producer of the content (`user`, `model`, `system`)
    pub role: String,
    /// Ordered parts making up the turn
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a turn with the given role and parts
    pub fn new(role: impl Into<String>, parts: Vec<Part>) -> Self {
        Self {
            role: role.into(),
            parts,
        }
    }

    /// Create a `user` turn with a single text part
    pub fn user(text: impl Into<String>) -> Self {
        Self::new("user", vec![Part::text(text)])
    }

    /// Create a `model` turn with a single text part
    pub fn model(text: impl Into<String>) -> Self {
        Self::new("model", vec![Part::text(text)])
    }

    /// Create a `system` turn with a single text part
    pub fn system(text: impl Into<String>) -> Self {
        Self::new("system", vec![Part::text(text)])
    }
}

/// One part of a conversation turn.
///
/// Exactly one of the fields is normally set; unset fields are omitted from
/// the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Plain text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// A function call produced by the model
    #[serde(skip_serializing_if = "Option::is_none", rename = "functionCall")]
    pub function_call: Option<FunctionCall>,
    /// The result of a function call, supplied by the caller
    #[serde(skip_serializing_if = "Option::is_none", rename = "functionResponse")]
    pub function_response: Option<FunctionResponse>,
}

impl Part {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Create a function-call part
    pub fn function_call(call: FunctionCall) -> Self {
        Self {
            function_call: Some(call),
            ..Self::default()
        }
    }

    /// Create a function-response part
    pub fn function_response(response: FunctionResponse) -> Self {
        Self {
            function_response: Some(response),
            ..Self::default()
        }
    }
}

/// A function call requested by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Name of the function to call
    pub name: String,
    /// Call arguments as a JSON object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<serde_json::Value>,
}

/// The result of a function call, echoed back into the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    /// Name of the function that was called
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Function output as a JSON object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
}

/// A request turn: either a bare prompt string or a full [`Content`] turn.
///
/// Bare strings are shorthand for a single-text-part `user` turn and are
/// interpreted that way by every backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentInput {
    /// Bare prompt text, treated as a `user` turn
    Text(String),
    /// A fully-specified conversation turn
    Content(Content),
}

impl From<&str> for ContentInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ContentInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Content> for ContentInput {
    fn from(content: Content) -> Self {
        Self::Content(content)
    }
}
