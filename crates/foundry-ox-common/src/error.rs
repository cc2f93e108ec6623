use thiserror::Error;

/// Errors that can occur while talking to an upstream service.
#[derive(Error, Debug)]
pub enum RequestError {
    /// HTTP transport failure (connection, timeout, redirect loop).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The upstream service answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Api {
        /// Status code of the response.
        status: u16,
        /// Message extracted from the error body, or the raw body.
        message: String,
    },

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl RequestError {
    /// Status code of the upstream failure, if this is an API error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Parse a non-success response into a `RequestError::Api`.
pub fn parse_error_response(status: reqwest::StatusCode, body: &bytes::Bytes) -> RequestError {
    RequestError::Api {
        status: status.as_u16(),
        message: extract_error_message(body)
            .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned()),
    }
}

/// Dig the human-readable message out of a JSON error body.
fn extract_error_message(body: &bytes::Bytes) -> Option<String> {
    let json: serde_json::Value = serde_json::from_slice(body).ok()?;

    // {"error": {"message": "..."}}
    if let Some(message) = json
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(message.to_string());
    }

    // {"message": "..."}
    json.get("message")
        .and_then(|message| message.as_str())
        .map(ToString::to_string)
}
