//! Error type shared by the HTTP client and the API wrappers.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Every variant carries enough to show the user one
//! message, and callers leave the state stable and let the user retry.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure, including timeouts.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered 401. The stored token has already been cleared.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },
    /// Any other non-2xx answer.
    #[error("server returned {status}")]
    Server { status: u16, message: Option<String> },
    /// A 2xx body that did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Message reported by the server, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Message to show the user: the server's own text, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }

    /// HTTP status of the failed response, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Looks at `message` first, then FastAPI's `detail` (a string, or a list of
/// validation entries whose first `msg` is used).
#[must_use]
pub fn extract_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    if let Some(message) = value.get("message").and_then(serde_json::Value::as_str) {
        return non_empty(message);
    }
    match value.get("detail")? {
        serde_json::Value::String(detail) => non_empty(detail),
        serde_json::Value::Array(entries) => entries
            .first()
            .and_then(|entry| entry.get("msg"))
            .and_then(serde_json::Value::as_str)
            .and_then(non_empty),
        _ => None,
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
