use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents a request to call a tool function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolUse {
    /// Unique identifier for this tool call.
    pub id: String,
    /// Name of the function to call.
    pub name: String,
    /// Arguments to pass to the function.
    pub args: Value,
}

impl ToolUse {
    /// Creates a new ToolUse with the given id, name, and arguments.
    pub fn new(id: impl Into<String>, name: impl Into<String>, args: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            args,
        }
    }
}

/// Result of a successful tool invocation.
///
/// Tool handlers are the outermost layer; anything below them returns
/// structured values, and only here does a result become either a JSON
/// document or plain text for the host runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolOutput {
    /// Plain text shown to the caller as-is.
    Text(String),
    /// A structured JSON document.
    Json(Value),
}

impl ToolOutput {
    /// Plain-text output.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// The text content, if this output is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(_) => None,
        }
    }

    /// The JSON content, if this output is a document.
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Text(_) => None,
            Self::Json(value) => Some(value),
        }
    }
}
